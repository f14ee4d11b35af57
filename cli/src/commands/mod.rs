//! CLI command implementations
//!
//! Each command module implements a specific sqlchat CLI command.

pub mod ask;
pub mod chat;
pub mod check;
pub mod init;
pub mod query;
pub mod schema;

use crate::config::Config;
use crate::db::Database;
use crate::error::CliError;
use crate::llm::GeminiTranslator;

/// Open the database named by the config's credentials
pub fn connect(config: &Config) -> Result<Database, CliError> {
    let creds = config.credentials()?;
    Database::connect(&creds)
}

/// Build the translator from the `[llm]` table
pub fn translator(config: &Config) -> Result<GeminiTranslator, CliError> {
    let llm = &config.llm;
    let api_key = llm.api_key()?;
    Ok(GeminiTranslator::new(&llm.endpoint, &llm.model, api_key)?)
}
