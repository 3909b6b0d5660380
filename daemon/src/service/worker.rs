use crate::models::{NewWorker, WorkerRow, WorkerUpdate};
use crate::service::{self, CrudService};
use crate::util;
use chrono::NaiveDateTime;
use corpore_common::api::{Envelope, Worker, WorkerRequest, WORKER_NOT_FOUND};
use corpore_common::errors::*;
use diesel::SqliteConnection;

pub struct Workers;

impl CrudService for Workers {
    type Record = Worker;
    type Request = WorkerRequest;

    const NOT_FOUND: &'static str = WORKER_NOT_FOUND;

    fn list(connection: &mut SqliteConnection) -> Result<Vec<Worker>> {
        let workers = WorkerRow::list(connection)?;
        Ok(workers.into_iter().map(Worker::from).collect())
    }

    fn find(id: i32, connection: &mut SqliteConnection) -> Result<Option<Worker>> {
        let worker = WorkerRow::get_id(id, connection)?;
        Ok(worker.map(Worker::from))
    }

    fn insert(
        request: WorkerRequest,
        now: NaiveDateTime,
        connection: &mut SqliteConnection,
    ) -> Result<()> {
        NewWorker {
            name: request.name,
            shift: request.shift,
            active: request.active,
            role: request.role,
            created_at: now,
            updated_at: Some(now),
        }
        .insert(connection)
    }

    fn update(
        id: i32,
        request: WorkerRequest,
        now: NaiveDateTime,
        connection: &mut SqliteConnection,
    ) -> Result<()> {
        if let Some(body_id) = request.id {
            if body_id != id {
                warn!(
                    "Ignoring worker id {} from request body, updating worker {} from path",
                    body_id, id
                );
            }
        }

        WorkerUpdate {
            name: request.name,
            shift: request.shift,
            active: request.active,
            role: request.role,
            updated_at: Some(now),
        }
        .apply(id, connection)
    }

    fn delete(id: i32, connection: &mut SqliteConnection) -> Result<()> {
        WorkerRow::delete(id, connection)
    }
}

/// Marks a worker inactive without touching anything else about it.
pub fn deactivate(id: i32, connection: &mut SqliteConnection) -> Envelope<Vec<Worker>> {
    if let Err(envelope) = service::lookup::<Workers, _>(id, connection) {
        return envelope;
    }

    service::capture(|| {
        WorkerRow::deactivate(id, util::now(), connection)?;
        Workers::list(connection)
    })
}
