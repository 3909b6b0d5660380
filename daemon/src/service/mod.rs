//! Envelope producing operations shared by every record type.
//!
//! Each function here is total: storage errors and missing records are reported through the
//! returned [`Envelope`] and never escape to the caller.

pub mod service_order;
pub mod worker;

pub use self::service_order::ServiceOrders;
pub use self::worker::Workers;

use crate::util;
use chrono::NaiveDateTime;
use corpore_common::api::{Envelope, MUST_PROVIDE_DATA, NO_DATA_FOUND};
use corpore_common::errors::*;
use diesel::SqliteConnection;

/// Storage access for one record type.
pub trait CrudService {
    /// What gets sent back to clients.
    type Record;
    /// What clients send to create or edit a record.
    type Request;

    const NOT_FOUND: &'static str;

    fn list(connection: &mut SqliteConnection) -> Result<Vec<Self::Record>>;

    fn find(id: i32, connection: &mut SqliteConnection) -> Result<Option<Self::Record>>;

    fn insert(
        request: Self::Request,
        now: NaiveDateTime,
        connection: &mut SqliteConnection,
    ) -> Result<()>;

    /// Only called for ids that exist.
    fn update(
        id: i32,
        request: Self::Request,
        now: NaiveDateTime,
        connection: &mut SqliteConnection,
    ) -> Result<()>;

    fn delete(id: i32, connection: &mut SqliteConnection) -> Result<()>;
}

pub fn persistence_failure<T>(err: Error) -> Envelope<T> {
    error!("Database operation failed: {:#}", err);
    Envelope::failure(format!("{:#}", err))
}

/// Runs a storage operation and wraps its outcome.
pub fn capture<T, F>(f: F) -> Envelope<T>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(data) => Envelope::success(data),
        Err(err) => persistence_failure(err),
    }
}

/// Resolves `id` to an existing record, or the envelope to answer with if there is none.
pub fn lookup<S: CrudService, T>(
    id: i32,
    connection: &mut SqliteConnection,
) -> std::result::Result<S::Record, Envelope<T>> {
    match S::find(id, connection) {
        Ok(Some(record)) => Ok(record),
        Ok(None) => {
            debug!("No record for id {}: {}", id, S::NOT_FOUND);
            Err(Envelope::failure(S::NOT_FOUND))
        }
        Err(err) => Err(persistence_failure(err)),
    }
}

pub fn list<S: CrudService>(connection: &mut SqliteConnection) -> Envelope<Vec<S::Record>> {
    match S::list(connection) {
        Ok(records) if records.is_empty() => {
            Envelope::success(records).with_message(NO_DATA_FOUND)
        }
        Ok(records) => Envelope::success(records),
        Err(err) => persistence_failure(err),
    }
}

pub fn get_by_id<S: CrudService>(id: i32, connection: &mut SqliteConnection) -> Envelope<S::Record> {
    match lookup::<S, _>(id, connection) {
        Ok(record) => Envelope::success(record),
        Err(envelope) => envelope,
    }
}

pub fn create<S: CrudService>(
    request: Option<S::Request>,
    connection: &mut SqliteConnection,
) -> Envelope<Vec<S::Record>> {
    let Some(request) = request else {
        return Envelope::failure(MUST_PROVIDE_DATA);
    };

    capture(|| {
        S::insert(request, util::now(), connection)?;
        S::list(connection)
    })
}

pub fn update<S: CrudService>(
    id: i32,
    request: Option<S::Request>,
    connection: &mut SqliteConnection,
) -> Envelope<Vec<S::Record>> {
    let Some(request) = request else {
        return Envelope::failure(MUST_PROVIDE_DATA);
    };

    if let Err(envelope) = lookup::<S, _>(id, connection) {
        return envelope;
    }

    capture(|| {
        S::update(id, request, util::now(), connection)?;
        S::list(connection)
    })
}

pub fn delete<S: CrudService>(
    id: i32,
    connection: &mut SqliteConnection,
) -> Envelope<Vec<S::Record>> {
    if let Err(envelope) = lookup::<S, _>(id, connection) {
        return envelope;
    }

    capture(|| {
        S::delete(id, connection)?;
        S::list(connection)
    })
}
