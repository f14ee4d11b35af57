//! Schema command - prints the reconstructed CREATE TABLE statements

use std::path::Path;

use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config, out: Option<&Path>) -> Result<(), CliError> {
    let mut db = super::connect(config)?;
    let schema = db.schema()?;

    match out {
        Some(path) => {
            std::fs::write(path, format!("{schema}\n"))
                .map_err(|e| CliError::IoError(e.to_string()))?;
            eprintln!(
                "{}",
                output::success(&format!(
                    "Wrote {} table(s) to {}",
                    schema.table_count(),
                    path.display()
                ))
            );
        }
        None => {
            if !schema.is_empty() {
                println!("{schema}");
            }
            eprintln!(
                "{}",
                output::muted(&format!(
                    "{} table(s) in {} ({})",
                    schema.table_count(),
                    db.target(),
                    db.dialect()
                ))
            );
        }
    }

    Ok(())
}
