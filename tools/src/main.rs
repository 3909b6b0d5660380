use crate::args::*;
use crate::fancy::Fancy;
use clap::Parser;
use colored::*;
use corpore_common::api::{
    Client, Envelope, Machine, ServiceOrder, ServiceOrderRequest, ServiceOrderRestApi,
    WorkerRequest, WorkerRestApi,
};
use corpore_common::errors::*;
use env_logger::Env;
use serde::Serialize;
use std::io;
use std::io::prelude::*;
use std::path::PathBuf;

pub mod args;
pub mod fancy;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn print_json<S: Serialize>(x: &S) -> Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &x)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn print_message<T>(envelope: &Envelope<T>) {
    if !envelope.message.is_empty() {
        info!("{}", envelope.message);
    }
}

fn print_workers(workers: &[corpore_common::api::Worker]) -> Result<()> {
    let mut stdout = io::stdout();
    for worker in workers {
        let label = format!("#{} {}", worker.id, worker.name.bold());
        let updated_at = worker
            .updated_at
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_default();

        if writeln!(
            stdout,
            "[{}] {:-40} {:9} {:15} {} {}",
            worker.fancy(),
            label,
            worker.shift.to_string(),
            worker.role.to_string(),
            worker.created_at.format(TIME_FORMAT).to_string().bright_black(),
            updated_at.bright_black(),
        )
        .is_err()
        {
            break;
        }
    }
    Ok(())
}

fn print_service_orders(orders: &[ServiceOrder]) -> Result<()> {
    let mut stdout = io::stdout();
    for order in orders {
        let worker = if let Some(worker) = &order.worker {
            worker.name.as_str()
        } else {
            "-"
        };
        let completed = order
            .completion_time
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_default();

        if writeln!(
            stdout,
            "[{}] #{:<5} {:18} {} {:19} {:20} {}",
            order.fancy(),
            order.id,
            order.machine.bold(),
            order.start_time.format(TIME_FORMAT).to_string().bright_black(),
            completed,
            format!("{} (#{})", worker, order.worker_id),
            order.description,
        )
        .is_err()
        {
            break;
        }
    }
    Ok(())
}

fn worker_request(fields: WorkerFields) -> WorkerRequest {
    WorkerRequest {
        id: None,
        name: fields.name,
        shift: fields.shift,
        active: !fields.inactive,
        role: fields.role,
    }
}

fn service_order_request(fields: OrderFields) -> ServiceOrderRequest {
    if fields.machine.parse::<Machine>().is_err() {
        warn!("Unknown machine {:?}, sending it anyway", fields.machine);
    }

    ServiceOrderRequest {
        id: None,
        machine: fields.machine,
        completion_time: None,
        worker_id: fields.worker,
        description: fields.description,
    }
}

fn connect(config: Option<PathBuf>, endpoint: Option<String>) -> Result<Client> {
    let config = corpore_common::config::load(config).context("Failed to load config file")?;
    Client::new(config, endpoint)
}

async fn run_worker(client: &Client, json: bool, cmd: args::Worker) -> Result<()> {
    let envelope = match cmd {
        args::Worker::Get(Id { id }) => {
            let envelope = client.get_worker(id).await?;
            if json {
                print_json(&envelope.data)?;
            } else if let Some(worker) = envelope.data {
                print_workers(&[worker])?;
            }
            return Ok(());
        }
        args::Worker::Ls => client.get_workers().await?,
        args::Worker::Add(fields) => client.create_worker(worker_request(fields)).await?,
        args::Worker::Edit(edit) => {
            client
                .update_worker(edit.id, worker_request(edit.fields))
                .await?
        }
        args::Worker::Rm(Id { id }) => client.delete_worker(id).await?,
        args::Worker::Deactivate(Id { id }) => client.deactivate_worker(id).await?,
    };

    print_message(&envelope);
    let workers = envelope.data.unwrap_or_default();
    if json {
        print_json(&workers)
    } else {
        print_workers(&workers)
    }
}

async fn run_order(client: &Client, json: bool, cmd: Order) -> Result<()> {
    let envelope = match cmd {
        Order::Get(Id { id }) => {
            let envelope = client.get_service_order(id).await?;
            if json {
                print_json(&envelope.data)?;
            } else if let Some(order) = envelope.data {
                print_service_orders(&[order])?;
            }
            return Ok(());
        }
        Order::Ls => client.get_service_orders().await?,
        Order::Add(add) => {
            let mut request = service_order_request(add.fields);
            request.completion_time = add.completed_at;
            client.create_service_order(request).await?
        }
        Order::Edit(edit) => {
            client
                .update_service_order(edit.id, service_order_request(edit.fields))
                .await?
        }
        Order::Rm(Id { id }) => client.delete_service_order(id).await?,
    };

    print_message(&envelope);
    let orders = envelope.data.unwrap_or_default();
    if json {
        print_json(&orders)
    } else {
        print_service_orders(&orders)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let logging = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::init_from_env(Env::default().default_filter_or(logging));

    if args.color {
        debug!("Bypass tty detection and always use colors");
        colored::control::set_override(true);
    }

    match args.subcommand {
        SubCommand::Worker(cmd) => {
            let client = connect(args.config, args.endpoint)?;
            run_worker(&client, args.json, cmd).await?;
        }
        SubCommand::Order(cmd) => {
            let client = connect(args.config, args.endpoint)?;
            run_order(&client, args.json, cmd).await?;
        }
        SubCommand::Completions(completions) => args::gen_completions(&completions)?,
    }

    Ok(())
}
