use crate::schema::*;
use chrono::NaiveDateTime;
use corpore_common::api::{Role, Shift, Worker};
use corpore_common::errors::*;
use diesel::prelude::*;

#[derive(Identifiable, Queryable, Selectable, Clone, PartialEq, Debug)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(table_name = workers)]
pub struct WorkerRow {
    pub id: i32,
    pub name: String,
    pub shift: Shift,
    pub active: bool,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl WorkerRow {
    pub fn get_id(my_id: i32, connection: &mut SqliteConnection) -> Result<Option<WorkerRow>> {
        let worker = workers::table
            .filter(workers::id.eq(my_id))
            .select(WorkerRow::as_select())
            .first(connection)
            .optional()?;
        Ok(worker)
    }

    pub fn list(connection: &mut SqliteConnection) -> Result<Vec<WorkerRow>> {
        let workers = workers::table
            .select(WorkerRow::as_select())
            .order_by(workers::id.asc())
            .load(connection)?;
        Ok(workers)
    }

    pub fn deactivate(
        my_id: i32,
        now: NaiveDateTime,
        connection: &mut SqliteConnection,
    ) -> Result<()> {
        diesel::update(workers::table.filter(workers::id.eq(my_id)))
            .set((workers::active.eq(false), workers::updated_at.eq(Some(now))))
            .execute(connection)?;
        Ok(())
    }

    pub fn delete(my_id: i32, connection: &mut SqliteConnection) -> Result<()> {
        diesel::delete(workers::table.filter(workers::id.eq(my_id))).execute(connection)?;
        Ok(())
    }
}

impl From<WorkerRow> for Worker {
    fn from(row: WorkerRow) -> Worker {
        Worker {
            id: row.id,
            name: row.name,
            shift: row.shift,
            active: row.active,
            role: row.role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(table_name = workers)]
pub struct NewWorker {
    pub name: String,
    pub shift: Shift,
    pub active: bool,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl NewWorker {
    pub fn insert(&self, connection: &mut SqliteConnection) -> Result<()> {
        diesel::insert_into(workers::table)
            .values(self)
            .execute(connection)
            .context("Failed to insert worker")?;
        Ok(())
    }
}

/// Every column a client may edit, `created_at` is deliberately absent.
#[derive(AsChangeset, PartialEq, Debug, Clone)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(table_name = workers)]
pub struct WorkerUpdate {
    pub name: String,
    pub shift: Shift,
    pub active: bool,
    pub role: Role,
    pub updated_at: Option<NaiveDateTime>,
}

impl WorkerUpdate {
    pub fn apply(&self, my_id: i32, connection: &mut SqliteConnection) -> Result<()> {
        diesel::update(workers::table.filter(workers::id.eq(my_id)))
            .set(self)
            .execute(connection)
            .context("Failed to update worker")?;
        Ok(())
    }
}
