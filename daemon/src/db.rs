use corpore_common::errors::*;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

pub type Pool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// Applied to every connection the pool hands out, sqlite forgets these settings per connection.
#[derive(Debug)]
pub struct ConnectionOptions {
    pub busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(
        &self,
        connection: &mut SqliteConnection,
    ) -> std::result::Result<(), r2d2::Error> {
        configure(connection, self.busy_timeout).map_err(r2d2::Error::QueryError)
    }
}

fn configure(connection: &mut SqliteConnection, busy_timeout: Duration) -> QueryResult<()> {
    connection.batch_execute(&format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
        busy_timeout.as_millis()
    ))
}

pub fn setup(url: &str) -> Result<SqliteConnection> {
    let mut connection = SqliteConnection::establish(url)
        .with_context(|| anyhow!("Failed to open database: {url:?}"))?;
    configure(&mut connection, BUSY_TIMEOUT)?;

    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| format_err!("Failed to run migrations: {err}"))?;
    for version in applied {
        info!("Applied database migration {}", version);
    }

    Ok(connection)
}

pub fn setup_pool(url: &str) -> Result<Pool> {
    setup(url)?;

    let manager = ConnectionManager::<SqliteConnection>::new(url);
    let pool = r2d2::Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: BUSY_TIMEOUT,
        }))
        .build(manager)
        .context("Failed to create pool")?;
    Ok(pool)
}
