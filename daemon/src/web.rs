pub use actix_web::web::{scope, Data, Json, JsonConfig, Path, PathConfig};
use crate::db::Pool;
use crate::service;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use corpore_common::api::Envelope;
use corpore_common::errors::*;
use diesel::SqliteConnection;
use serde::Serialize;

/// Every answer carries the envelope, `failure` is used when it isn't successful.
pub fn respond<T: Serialize>(envelope: Envelope<T>, failure: StatusCode) -> HttpResponse {
    let status = if envelope.success {
        StatusCode::OK
    } else {
        failure
    };
    HttpResponse::build(status).json(envelope)
}

pub fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            warn!("Rejecting request body: {}", err);
            let response =
                HttpResponse::BadRequest().json(Envelope::<()>::failure(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

/// Ids in the path that don't parse are answered like any other failure of the endpoint.
pub fn path_config<F>(failure: F) -> PathConfig
where
    F: Fn(&HttpRequest) -> StatusCode + Send + Sync + 'static,
{
    PathConfig::default().error_handler(move |err, req| {
        debug!("Rejecting request path {:?}: {}", req.path(), err);
        let response =
            HttpResponse::build(failure(req)).json(Envelope::<()>::failure(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

/// Checks a connection out of the pool for the duration of `f`.
pub fn with_connection<T, F>(pool: &Pool, f: F) -> Envelope<T>
where
    F: FnOnce(&mut SqliteConnection) -> Envelope<T>,
{
    match pool.get() {
        Ok(mut connection) => f(&mut connection),
        Err(err) => {
            let err = Error::from(err).context("Failed to get connection from pool");
            service::persistence_failure(err)
        }
    }
}
