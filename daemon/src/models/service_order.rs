use crate::models::WorkerRow;
use crate::schema::*;
use chrono::NaiveDateTime;
use corpore_common::api::ServiceOrder;
use corpore_common::errors::*;
use diesel::prelude::*;

#[derive(Identifiable, Queryable, Selectable, Clone, PartialEq, Debug)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(table_name = service_orders)]
pub struct ServiceOrderRow {
    pub id: i32,
    pub machine: String,
    pub start_time: NaiveDateTime,
    pub completion_time: Option<NaiveDateTime>,
    pub worker_id: i32,
    pub description: String,
}

impl ServiceOrderRow {
    /// Loads the order together with the worker it is assigned to.
    pub fn get_id(
        my_id: i32,
        connection: &mut SqliteConnection,
    ) -> Result<Option<(ServiceOrderRow, WorkerRow)>> {
        let order = service_orders::table
            .inner_join(workers::table)
            .filter(service_orders::id.eq(my_id))
            .select((ServiceOrderRow::as_select(), WorkerRow::as_select()))
            .first(connection)
            .optional()?;
        Ok(order)
    }

    pub fn list(connection: &mut SqliteConnection) -> Result<Vec<(ServiceOrderRow, WorkerRow)>> {
        let orders = service_orders::table
            .inner_join(workers::table)
            .select((ServiceOrderRow::as_select(), WorkerRow::as_select()))
            .order_by(service_orders::id.asc())
            .load(connection)?;
        Ok(orders)
    }

    pub fn delete(my_id: i32, connection: &mut SqliteConnection) -> Result<()> {
        diesel::delete(service_orders::table.filter(service_orders::id.eq(my_id)))
            .execute(connection)?;
        Ok(())
    }

    pub fn into_api(self, worker: WorkerRow) -> ServiceOrder {
        ServiceOrder {
            id: self.id,
            machine: self.machine,
            start_time: self.start_time,
            completion_time: self.completion_time,
            worker_id: self.worker_id,
            description: self.description,
            worker: Some(worker.into()),
        }
    }
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(table_name = service_orders)]
pub struct NewServiceOrder {
    pub machine: String,
    pub start_time: NaiveDateTime,
    pub completion_time: Option<NaiveDateTime>,
    pub worker_id: i32,
    pub description: String,
}

impl NewServiceOrder {
    pub fn insert(&self, connection: &mut SqliteConnection) -> Result<()> {
        diesel::insert_into(service_orders::table)
            .values(self)
            .execute(connection)
            .context("Failed to insert service order")?;
        Ok(())
    }
}

#[derive(AsChangeset, PartialEq, Debug, Clone)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(table_name = service_orders)]
pub struct ServiceOrderUpdate {
    pub machine: String,
    pub completion_time: Option<NaiveDateTime>,
    pub worker_id: i32,
    pub description: String,
}

impl ServiceOrderUpdate {
    pub fn apply(&self, my_id: i32, connection: &mut SqliteConnection) -> Result<()> {
        diesel::update(service_orders::table.filter(service_orders::id.eq(my_id)))
            .set(self)
            .execute(connection)
            .context("Failed to update service order")?;
        Ok(())
    }
}
