use corpore_common::config::{
    ConfigFile, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_PATH, DEFAULT_POST_BODY_SIZE_LIMIT,
};
use corpore_common::errors::*;
use std::env;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub post_body_size_limit: usize,
    pub database: String,
}

pub fn load(path: Option<&Path>) -> Result<Config> {
    let config = corpore_common::config::load(path)?;
    from_struct(config)
}

pub fn from_struct(config: ConfigFile) -> Result<Config> {
    let bind_addr = if let Ok(addr) = env::var("HTTP_ADDR") {
        addr
    } else if let Some(addr) = config.http.bind_addr {
        addr
    } else {
        DEFAULT_BIND_ADDR.to_string()
    };

    let database = if let Ok(url) = env::var("DATABASE_URL") {
        url
    } else if let Some(path) = config.database.path {
        path
    } else {
        DEFAULT_DATABASE_PATH.to_string()
    };

    let post_body_size_limit = config
        .http
        .post_body_size_limit
        .unwrap_or(DEFAULT_POST_BODY_SIZE_LIMIT);
    if post_body_size_limit == 0 {
        bail!("http.post_body_size_limit must be greater than zero");
    }

    Ok(Config {
        bind_addr,
        post_body_size_limit,
        database,
    })
}
