mod args;

use crate::args::Args;
use clap::Parser;
use corpore::config;
use corpore::db;
use corpore_common::errors::*;
use env_logger::Env;

/// Reads `RUST_LOG` when called, so `.env` has to be loaded before.
fn logger(verbose: u8) -> env_logger::Builder {
    let logging = match verbose {
        0 => "actix_web=debug,info",
        1 => "actix_web=debug,corpore=debug,corpore_common=debug,info",
        2 => "debug",
        3 => "corpore=trace,corpore_common=trace,debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(logging))
}

#[actix_web::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    logger(args.verbose).init();

    let config = config::load(args.config.as_deref())?;
    if args.check_config {
        println!("{:#?}", config);
    } else {
        let pool = db::setup_pool(&config.database)?;
        corpore::run_config(pool, config).await?;
    }
    Ok(())
}
