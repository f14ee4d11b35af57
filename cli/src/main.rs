//! sqlchat CLI - Main entry point

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sqlchat_cli::config::{CONFIG_FILE, Config};
use sqlchat_cli::error::CliError;
use sqlchat_cli::{commands, logging};
use sqlchat_core::Dialect;

/// sqlchat - ask your database questions in plain language
#[derive(Parser, Debug)]
#[command(name = "sqlchat")]
#[command(author, version, about = "Ask your database questions in plain language", long_about = None)]
struct Cli {
    /// Path to config file (default: sqlchat.config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log catalog queries and model calls to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new sqlchat.config.toml configuration file
    Init {
        /// Database dialect (sqlite, postgresql, mysql)
        #[arg(short, long, default_value = "sqlite", value_parser = parse_dialect)]
        dialect: Dialect,
    },

    /// Validate configuration file
    Check,

    /// Print the reconstructed CREATE TABLE statements
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Run one read-only SQL statement
    Query {
        /// The statement to run
        sql: String,
    },

    /// Translate a question to SQL, run it and print the answer
    Ask {
        /// The question, in plain language
        question: String,

        /// Print the generated SQL without running it
        #[arg(long)]
        explain: bool,
    },

    /// Start an interactive question session
    Chat,
}

fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse().map_err(|e: sqlchat_core::UnknownDialect| e.to_string())
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Init { dialect } => {
            let path = config_path.unwrap_or(Path::new(CONFIG_FILE));
            commands::init::run(path, dialect)
        }
        Command::Check => {
            let path = config_path.unwrap_or(Path::new(CONFIG_FILE));
            let config = load_config(config_path)?;
            commands::check::run(&config, path)
        }
        Command::Schema { out } => {
            let config = load_config(config_path)?;
            commands::schema::run(&config, out.as_deref())
        }
        Command::Query { sql } => {
            let config = load_config(config_path)?;
            commands::query::run(&config, &sql)
        }
        Command::Ask { question, explain } => {
            let config = load_config(config_path)?;
            commands::ask::run(&config, &question, explain)
        }
        Command::Chat => {
            let config = load_config(config_path)?;
            commands::chat::run(&config)
        }
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}
