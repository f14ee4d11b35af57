//! sqlchat CLI - ask a database questions in plain language
//!
//! The CLI reads a `sqlchat.config.toml`, introspects the configured database
//! into `CREATE TABLE` statements, sends them with each question to a language
//! model, and runs the SQL it returns read-only.
//!
//! # Configuration
//!
//! Run `sqlchat init` to create a config, or write one by hand:
//!
//! ```toml
//! dialect = "sqlite"
//!
//! [dbCredentials]
//! url = "./shop.db"
//!
//! [llm]
//! model = "gemini-2.5-flash"
//! apiKey = { env = "GEMINI_API_KEY" }
//! ```
//!
//! For PostgreSQL or MySQL either give a `url` or the `host`, `port`, `user`,
//! `password` and `database` fields. Any value may be `{ env = "NAME" }`.
//!
//! # Commands
//!
//! - `sqlchat init` - Create a new config file
//! - `sqlchat check` - Validate the config and credentials
//! - `sqlchat schema` - Print the schema the model will see
//! - `sqlchat query <SQL>` - Run one read-only statement
//! - `sqlchat ask <QUESTION>` - Answer one question
//! - `sqlchat chat` - Interactive session

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod logging;
pub mod output;
pub mod transcript;

pub use config::{Config, Credentials, Error as ConfigError};
pub use error::CliError;
