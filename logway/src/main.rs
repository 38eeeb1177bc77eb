use clap::{Parser, Subcommand};
use logway_core::cli::{self, ConfigCmd, ExplainCmd};
use logway_core::conf::load_config;
use logway_core::logging::init_logging;
use logway_core::server;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logway", version, about = "Logway: HTTP query facade over Loki")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the API server (default)
    Run {
        /// Path to the config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// Show the LogQL a request would produce
    Explain {
        /// Path to the config file
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, global = true)]
        json: bool,

        #[command(subcommand)]
        cmd: ExplainCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { cmd }) => cli::config::run(cmd),

        Some(Command::Explain { config, json, cmd }) => cli::explain::run(cmd, config, json),

        Some(Command::Run { config }) => run(config),

        None => run(None),
    }
}

fn run(config: Option<PathBuf>) -> anyhow::Result<()> {
    init_logging();

    let validated = load_config(config.as_deref())?;
    for warning in &validated.report.warnings {
        tracing::warn!(field = %warning.field, "{}", warning.message);
    }

    server::run(validated)
}
