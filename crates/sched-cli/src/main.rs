use clap::{Parser, Subcommand};
use tracing::debug;

use sched_observe::{LoggerConfig, init_local_offset, init_logger};

mod commands;

#[derive(Parser)]
#[command(
    name = "schedctl",
    about = "Evaluate label scheduling constraints for a workload",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the label pipeline and print both schedule views as JSON.
    Eval(commands::eval::EvalArgs),
    /// List executor kinds and the workload shape each one schedules.
    Kinds {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Before any runtime thread exists.
    init_local_offset();

    let cfg = LoggerConfig::from_env()?;
    init_logger(&cfg)?;
    debug!(format = %cfg.format, level = cfg.level.as_str(), "logger initialized");

    let cli = Cli::parse();
    match cli.command {
        Commands::Eval(args) => commands::eval::run(&args),
        Commands::Kinds { json } => commands::kinds::run(json),
    }
}
