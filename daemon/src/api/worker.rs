use crate::db::Pool;
use crate::service::{self, Workers};
use crate::web;
use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, HttpRequest, HttpResponse};
use corpore_common::api::WorkerRequest;

pub fn failure_status(_req: &HttpRequest) -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

#[get("")]
pub async fn get_workers(pool: web::Data<Pool>) -> HttpResponse {
    let envelope = web::with_connection(&pool, service::list::<Workers>);
    web::respond(envelope, StatusCode::INTERNAL_SERVER_ERROR)
}

#[get("/{id}")]
pub async fn get_worker(pool: web::Data<Pool>, id: web::Path<i32>) -> HttpResponse {
    let id = id.into_inner();
    let envelope = web::with_connection(&pool, |conn| service::get_by_id::<Workers>(id, conn));
    web::respond(envelope, StatusCode::INTERNAL_SERVER_ERROR)
}

#[post("")]
pub async fn create_worker(
    pool: web::Data<Pool>,
    request: web::Json<Option<WorkerRequest>>,
) -> HttpResponse {
    let request = request.into_inner();
    let envelope = web::with_connection(&pool, |conn| service::create::<Workers>(request, conn));
    web::respond(envelope, StatusCode::INTERNAL_SERVER_ERROR)
}

#[put("/{id}")]
pub async fn update_worker(
    pool: web::Data<Pool>,
    id: web::Path<i32>,
    request: web::Json<Option<WorkerRequest>>,
) -> HttpResponse {
    let id = id.into_inner();
    let request = request.into_inner();
    let envelope =
        web::with_connection(&pool, |conn| service::update::<Workers>(id, request, conn));
    web::respond(envelope, StatusCode::INTERNAL_SERVER_ERROR)
}

#[delete("/{id}")]
pub async fn delete_worker(pool: web::Data<Pool>, id: web::Path<i32>) -> HttpResponse {
    let id = id.into_inner();
    let envelope = web::with_connection(&pool, |conn| service::delete::<Workers>(id, conn));
    web::respond(envelope, StatusCode::INTERNAL_SERVER_ERROR)
}

#[put("/{id}/deactivate")]
pub async fn deactivate_worker(pool: web::Data<Pool>, id: web::Path<i32>) -> HttpResponse {
    let id = id.into_inner();
    let envelope = web::with_connection(&pool, |conn| service::worker::deactivate(id, conn));
    web::respond(envelope, StatusCode::INTERNAL_SERVER_ERROR)
}
