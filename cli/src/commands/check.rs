//! Check command - validates configuration

use std::path::Path;

use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config, path: &Path) -> Result<(), CliError> {
    println!("{}", output::heading("Checking configuration..."));
    println!();
    println!("  {}: {}", output::label("File"), path.display());
    println!("  {}: {}", output::label("Dialect"), config.dialect);

    let mut has_errors = false;

    println!();
    print!("  {} Credentials... ", output::label("Checking"));
    match config.credentials() {
        Ok(creds) => {
            println!("{}", output::status_ok());
            println!("    {}: {}", output::muted("kind"), creds.kind());
            println!("    {}: {}", output::muted("target"), creds.target());
        }
        Err(e) => {
            println!("{}", output::status_error());
            println!("    {e}");
            has_errors = true;
        }
    }

    println!();
    print!("  {} Model... ", output::label("Checking"));
    match config.llm.api_key() {
        Ok(_) => println!("{}", output::status_ok()),
        Err(e) => {
            println!("{}", output::status_error());
            println!("    {e}");
            has_errors = true;
        }
    }
    println!("    {}: {}", output::muted("model"), config.llm.model);
    println!("    {}: {}", output::muted("endpoint"), config.llm.endpoint);

    println!();
    if has_errors {
        return Err(CliError::Other("Configuration has errors".into()));
    }
    println!("{}", output::success("Configuration is valid"));
    Ok(())
}
