//! Chat command - interactive question loop
//!
//! Lines starting with `:` are session commands; anything else is a question
//! answered against the schema captured at start (or at the last `:refresh`).

use std::io::Write;

use colored::Colorize;
use inquire::{InquireError, Text};
use sqlchat_core::SchemaDocument;

use crate::config::Config;
use crate::db::Database;
use crate::error::CliError;
use crate::llm::SqlTranslator;
use crate::output;
use crate::transcript::Transcript;

const HELP: &str = "\
:schema   show the schema sent to the model
:refresh  re-read the schema from the database
:history  replay this conversation
:help     show this help
:quit     leave";

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Question(String),
    Schema,
    Refresh,
    History,
    Help,
    Quit,
    Unknown(String),
    Blank,
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Blank;
        }
        let Some(command) = line.strip_prefix(':') else {
            return Input::Question(line.to_string());
        };
        match command.trim().to_ascii_lowercase().as_str() {
            "schema" => Input::Schema,
            "refresh" => Input::Refresh,
            "history" => Input::History,
            "help" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => Input::Unknown(line.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Connection, model and conversation state for one chat
pub struct ChatSession<T> {
    db: Database,
    translator: T,
    schema: SchemaDocument,
    transcript: Transcript,
}

impl<T: SqlTranslator> ChatSession<T> {
    /// Introspect once and start an empty conversation
    pub fn start(mut db: Database, translator: T) -> Result<Self, CliError> {
        let schema = db.schema()?;
        Ok(Self {
            db,
            translator,
            schema,
            transcript: Transcript::new(),
        })
    }

    pub fn schema(&self) -> &SchemaDocument {
        &self.schema
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Act on one input line, writing anything to show to `out`
    pub fn handle(&mut self, input: Input, out: &mut impl Write) -> Result<Step, CliError> {
        match input {
            Input::Blank => {}
            Input::Quit => return Ok(Step::Quit),
            Input::Help => writeln!(out, "{HELP}").map_err(io_err)?,
            Input::Unknown(command) => writeln!(
                out,
                "{}",
                output::warning(&format!("Unknown command {command} (try :help)"))
            )
            .map_err(io_err)?,
            Input::Schema => {
                if self.schema.is_empty() {
                    writeln!(out, "{}", output::muted("(no tables)")).map_err(io_err)?;
                } else {
                    writeln!(out, "{}", self.schema).map_err(io_err)?;
                }
            }
            Input::Refresh => {
                self.schema = self.db.schema()?;
                writeln!(
                    out,
                    "{}",
                    output::success(&format!(
                        "Schema refreshed: {} table(s)",
                        self.schema.table_count()
                    ))
                )
                .map_err(io_err)?;
            }
            Input::History => {
                for message in self.transcript.messages() {
                    writeln!(out, "{}", message.render()).map_err(io_err)?;
                }
            }
            Input::Question(question) => self.ask(question, out)?,
        }
        Ok(Step::Continue)
    }

    fn ask(&mut self, question: String, out: &mut impl Write) -> Result<(), CliError> {
        let answered = super::ask::answer(
            &mut self.db,
            &self.translator,
            self.schema.as_str(),
            &question,
        );
        self.transcript.push_user(question);

        match answered {
            Ok(outcome) => {
                for message in self.transcript.record(outcome) {
                    writeln!(out, "{}", message.render()).map_err(io_err)?;
                }
            }
            Err(e) => {
                let message = self.transcript.push_error(e.to_string());
                writeln!(out, "{}", message.render()).map_err(io_err)?;
            }
        }
        Ok(())
    }

    /// End the session and close the connection
    pub fn finish(self) -> Result<(), CliError> {
        tracing::debug!(questions = self.transcript.questions(), "chat finished");
        self.db.close()
    }
}

fn io_err(e: std::io::Error) -> CliError {
    CliError::IoError(e.to_string())
}

pub fn run(config: &Config) -> Result<(), CliError> {
    let db = super::connect(config)?;
    let translator = super::translator(config)?;
    let banner = format!("Connected to {} ({})", db.target(), db.dialect());
    let mut session = ChatSession::start(db, translator)?;

    println!("{}", output::heading(&banner));
    println!(
        "{}",
        output::muted(&format!(
            "{} table(s) loaded. Ask a question, or :help for commands.",
            session.schema().table_count()
        ))
    );

    let stdout = std::io::stdout();
    loop {
        let line = match Text::new("you>").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(CliError::Other(e.to_string())),
        };

        match session.handle(Input::parse(&line), &mut stdout.lock()) {
            Ok(Step::Quit) => break,
            Ok(Step::Continue) => {}
            Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
        }
    }

    session.finish()
}
