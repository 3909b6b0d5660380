use chrono::NaiveDateTime;
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use corpore_common::api::{Role, Shift};
use corpore_common::errors::*;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Verbose logging
    #[arg(short, long, global = true, action(ArgAction::Count))]
    pub verbose: u8,
    /// corpore endpoint to talk to
    #[arg(short = 'H', long)]
    pub endpoint: Option<String>,
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Bypass tty detection and always use colors
    #[arg(short = 'C', long, global = true)]
    pub color: bool,
    /// Print the returned records as json
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Worker related subcommands
    #[command(subcommand)]
    Worker(Worker),
    /// Service order related subcommands
    #[command(subcommand)]
    Order(Order),
    /// Generate shell completions
    Completions(Completions),
}

#[derive(Debug, Parser)]
pub enum Worker {
    /// List all workers
    Ls,
    /// Show a single worker
    Get(Id),
    /// Register a new worker
    Add(WorkerFields),
    /// Overwrite an existing worker
    Edit(WorkerEdit),
    /// Delete a worker together with their service orders
    Rm(Id),
    /// Mark a worker as inactive
    Deactivate(Id),
}

#[derive(Debug, Parser)]
pub struct Id {
    pub id: i32,
}

#[derive(Debug, Parser)]
pub struct WorkerFields {
    pub name: String,
    /// Morning, Afternoon or Night
    #[arg(long)]
    pub shift: Shift,
    /// Line-Operator-1, Line-Operator-2 or Line-Operator-3
    #[arg(long)]
    pub role: Role,
    /// Register the worker as inactive
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Debug, Parser)]
pub struct WorkerEdit {
    pub id: i32,
    #[command(flatten)]
    pub fields: WorkerFields,
}

#[derive(Debug, Parser)]
pub enum Order {
    /// List all service orders
    Ls,
    /// Show a single service order
    Get(Id),
    /// Open a new service order
    Add(OrderAdd),
    /// Overwrite an existing service order, this marks it as completed
    Edit(OrderEdit),
    /// Delete a service order
    Rm(Id),
}

#[derive(Debug, Parser)]
pub struct OrderFields {
    /// Machine the order is for, e.g. Gasket-Machine-1
    #[arg(long)]
    pub machine: String,
    /// Id of the worker the order is assigned to
    #[arg(long)]
    pub worker: i32,
    pub description: String,
}

#[derive(Debug, Parser)]
pub struct OrderAdd {
    #[command(flatten)]
    pub fields: OrderFields,
    /// Record the order as already completed at this time (e.g. 2024-01-05T17:30:00)
    #[arg(long)]
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Parser)]
pub struct OrderEdit {
    pub id: i32,
    #[command(flatten)]
    pub fields: OrderFields,
}

#[derive(Debug, Parser)]
pub struct Completions {
    pub shell: Shell,
}

pub fn gen_completions(args: &Completions) -> Result<()> {
    clap_complete::generate(
        args.shell,
        &mut Args::command(),
        "corporectl",
        &mut io::stdout(),
    );
    Ok(())
}
