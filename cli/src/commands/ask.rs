//! Ask command - one question, answered end to end

use crate::config::Config;
use crate::db::Database;
use crate::error::CliError;
use crate::llm::{SqlTranslator, TranslateError};
use crate::output;
use crate::transcript::{NO_SQL_REPLY, Outcome};

pub fn run(config: &Config, question: &str, explain: bool) -> Result<(), CliError> {
    let mut db = super::connect(config)?;
    let translator = super::translator(config)?;
    let schema = db.schema()?;

    if explain {
        return match translate(&translator, question, schema.as_str())? {
            Some(sql) => {
                println!("{sql}");
                Ok(())
            }
            None => Err(CliError::Other(NO_SQL_REPLY.into())),
        };
    }

    match answer(&mut db, &translator, schema.as_str(), question)? {
        Outcome::NoSql => Err(CliError::Other(NO_SQL_REPLY.into())),
        Outcome::Failed { sql, error } => {
            eprintln!("{}", output::sql(&sql));
            Err(CliError::Other(format!("SQL execution failed: {error}")))
        }
        outcome => {
            for message in outcome.into_messages() {
                println!("{}", message.render());
            }
            Ok(())
        }
    }
}

/// Ask the model for SQL; `None` when the reply held nothing usable
pub fn translate<T: SqlTranslator + ?Sized>(
    translator: &T,
    question: &str,
    schema: &str,
) -> Result<Option<String>, CliError> {
    match translator.translate(question, schema) {
        Ok(translation) => Ok(Some(translation.sql)),
        Err(TranslateError::Unparseable(reason)) => {
            tracing::debug!(%reason, "unusable model reply");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Translate `question` and run the SQL against `db`
///
/// Model and server failures that the user can act on become an [`Outcome`];
/// only transport and connection problems are errors.
pub fn answer<T: SqlTranslator + ?Sized>(
    db: &mut Database,
    translator: &T,
    schema: &str,
    question: &str,
) -> Result<Outcome, CliError> {
    let Some(sql) = translate(translator, question, schema)? else {
        return Ok(Outcome::NoSql);
    };

    match db.run_query(&sql) {
        Ok(output) if output.is_empty() => Ok(Outcome::Empty { sql }),
        Ok(output) => Ok(Outcome::Rows { sql, output }),
        Err(CliError::Query(e)) => Ok(Outcome::Failed {
            sql,
            error: e.source.to_string(),
        }),
        Err(e) => Err(e),
    }
}
