use crate::db::Pool;
use crate::service::{self, ServiceOrders};
use crate::web;
use actix_web::http::StatusCode;
use actix_web::http::Method;
use actix_web::{delete, get, post, put, HttpRequest, HttpResponse};
use corpore_common::api::ServiceOrderRequest;

/// Lookups and deletes fail with 404, writes with 400.
pub fn failure_status(req: &HttpRequest) -> StatusCode {
    if req.method() == Method::GET || req.method() == Method::DELETE {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    }
}

#[get("")]
pub async fn get_service_orders(pool: web::Data<Pool>) -> HttpResponse {
    let envelope = web::with_connection(&pool, service::list::<ServiceOrders>);
    web::respond(envelope, StatusCode::INTERNAL_SERVER_ERROR)
}

#[get("/{id}")]
pub async fn get_service_order(pool: web::Data<Pool>, id: web::Path<i32>) -> HttpResponse {
    let id = id.into_inner();
    let envelope =
        web::with_connection(&pool, |conn| service::get_by_id::<ServiceOrders>(id, conn));
    web::respond(envelope, StatusCode::NOT_FOUND)
}

#[post("")]
pub async fn create_service_order(
    pool: web::Data<Pool>,
    request: web::Json<Option<ServiceOrderRequest>>,
) -> HttpResponse {
    let request = request.into_inner();
    let envelope =
        web::with_connection(&pool, |conn| service::create::<ServiceOrders>(request, conn));
    web::respond(envelope, StatusCode::BAD_REQUEST)
}

#[put("/{id}")]
pub async fn update_service_order(
    pool: web::Data<Pool>,
    id: web::Path<i32>,
    request: web::Json<Option<ServiceOrderRequest>>,
) -> HttpResponse {
    let id = id.into_inner();
    let request = request.into_inner();
    let envelope = web::with_connection(&pool, |conn| {
        service::update::<ServiceOrders>(id, request, conn)
    });
    web::respond(envelope, StatusCode::BAD_REQUEST)
}

#[delete("/{id}")]
pub async fn delete_service_order(pool: web::Data<Pool>, id: web::Path<i32>) -> HttpResponse {
    let id = id.into_inner();
    let envelope =
        web::with_connection(&pool, |conn| service::delete::<ServiceOrders>(id, conn));
    web::respond(envelope, StatusCode::NOT_FOUND)
}
