use crate::config::Config;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use corpore_common::errors::*;
use std::net::SocketAddr;

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod schema;
pub mod service;
pub mod util;
pub mod web;

/// Binds the http server without starting it, returning the address it ended up on.
pub fn build_server(pool: db::Pool, config: Config) -> Result<(Server, SocketAddr)> {
    let post_body_size_limit = config.post_body_size_limit;

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::json_config(post_body_size_limit))
            .service(
                web::scope("/worker")
                    .app_data(web::path_config(api::worker::failure_status))
                    .service(api::worker::get_workers)
                    .service(api::worker::get_worker)
                    .service(api::worker::create_worker)
                    .service(api::worker::update_worker)
                    .service(api::worker::delete_worker)
                    .service(api::worker::deactivate_worker),
            )
            .service(
                web::scope("/service-order")
                    .app_data(web::path_config(api::service_order::failure_status))
                    .service(api::service_order::get_service_orders)
                    .service(api::service_order::get_service_order)
                    .service(api::service_order::create_service_order)
                    .service(api::service_order::update_service_order)
                    .service(api::service_order::delete_service_order),
            )
    })
    .bind(&config.bind_addr)
    .with_context(|| format!("Failed to bind http server to {:?}", config.bind_addr))?;

    let address = server
        .addrs()
        .into_iter()
        .next()
        .ok_or_else(|| format_err!("Http server is not listening on any address"))?;

    Ok((server.run(), address))
}

pub async fn run_config(pool: db::Pool, config: Config) -> Result<()> {
    let (server, address) = build_server(pool, config)?;
    info!("Listening on http://{}", address);
    server.await?;
    Ok(())
}
