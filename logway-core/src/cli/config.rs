use crate::conf::{ConfigError, ValidatedConfig, ValidationReport, load_config};
use clap::Subcommand;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file (defaults to config/logway.toml)
        path: Option<PathBuf>,

        /// Print the validation report as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print without colors
        #[arg(short, long)]
        plain: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, json, plain } => check(path.as_deref(), json, plain),
    }
}

pub fn check(path: Option<&Path>, json: bool, plain: bool) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(validated) => {
            if json {
                println!("{}", validated.report.render_json()?);
            } else {
                print_summary(&validated, plain);
            }
            Ok(())
        }
        Err(ConfigError::Validation { report }) => {
            print_report(&report, json, plain)?;
            std::process::exit(1);
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_summary(validated: &ValidatedConfig, plain: bool) {
    let cfg = &validated.config;
    let registry = &validated.registry;

    let mark = if plain {
        "✔".to_string()
    } else {
        "✔".green().to_string()
    };

    println!("{mark} Config loaded successfully");
    println!("{mark} listen {}", cfg.server.listen);
    println!("{mark} loki {}", cfg.backend.loki_url);
    println!("{mark} grafana {}", cfg.backend.grafana_url);
    println!(
        "{mark} {} stacks, {} services",
        registry.stacks().len(),
        registry.service_count()
    );
    if cfg.stacks.is_empty() {
        println!("  (no [[stacks]] declared; using the built-in registry)");
    }

    if validated.report.has_violations() {
        println!();
        if plain {
            validated.report.render_plain();
        } else {
            validated.report.render_pretty();
        }
    }
}

fn print_report(report: &ValidationReport, json: bool, plain: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", report.render_json()?);
    } else if plain {
        report.render_plain();
    } else {
        report.render_pretty();
    }
    Ok(())
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{err}");
    } else {
        eprintln!();
        eprintln!("{} {err}", "error:".red().bold());
    }

    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Pass an existing file, or omit the path to use config/logway.toml\n\
             (built-in defaults apply when that file is absent).",
        ),

        ConfigError::Parse { .. } => Some(
            "Every section is optional. A minimal file:\n\
             \n\
             [backend]\n\
             loki_url = \"http://loki:3100\"\n\
             \n\
             [[stacks]]\n\
             name = \"template\"\n\
             services = [{ role = \"api\", container = \"template-backend-api\" }]",
        ),

        ConfigError::Validation { .. } => None,
    }
}
