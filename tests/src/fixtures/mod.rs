
use crate::fixtures::server::{IsolatedServer, ServerHolder};
use corpore::config::Config;
use corpore::db;
use corpore_common::api::Client;
use corpore_common::config::{ConfigFile, DEFAULT_POST_BODY_SIZE_LIMIT};
use corpore_common::errors::info;
use rstest::fixture;
use tempfile::TempDir;

#[fixture]
pub fn config_file() -> ConfigFile {
    let mut config = ConfigFile::default();
    config.http.bind_addr = Some("127.0.0.1:0".to_string());
    config.http.post_body_size_limit = Some(DEFAULT_POST_BODY_SIZE_LIMIT);
    config
}

fn make_client(config_file: ConfigFile, endpoint: String) -> Client {
    info!("Setting up client for {:?}", endpoint);
    Client::new(config_file, Some(endpoint)).unwrap()
}

#[fixture]
pub fn isolated_server(config_file: ConfigFile) -> IsolatedServer {
    let _ = env_logger::builder().is_test(true).try_init();

    let database_dir = TempDir::new().unwrap();
    let database_path = database_dir.path().join("corpore.db");
    let database_path = database_path.to_str().unwrap().to_string();

    // environment overrides are ignored here, every test gets its own port and database
    let config = Config {
        bind_addr: config_file.http.bind_addr.clone().unwrap(),
        post_body_size_limit: config_file.http.post_body_size_limit.unwrap(),
        database: database_path.clone(),
    };

    let pool = db::setup_pool(&database_path).unwrap();

    let mut server = ServerHolder::new(pool.clone(), config).unwrap();
    server.start().unwrap();

    let endpoint = format!("http://{}", server.address);
    let client = make_client(config_file, endpoint);

    IsolatedServer::new(server, database_dir, pool, client)
}
