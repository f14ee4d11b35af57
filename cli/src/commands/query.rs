//! Query command - runs one read-only statement

use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config, sql: &str) -> Result<(), CliError> {
    let mut db = super::connect(config)?;
    let out = db.run_query(sql)?;
    println!("{}", output::table(&out));
    Ok(())
}
