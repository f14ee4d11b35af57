//! Chat transcript
//!
//! Ordered user and assistant messages for one chat session. Assistant
//! replies take one of three shapes: no SQL could be produced, SQL ran and
//! returned nothing, or SQL plus its result table.

use colored::Colorize;
use sqlchat_core::QueryOutput;

use crate::output;

pub const NO_SQL_REPLY: &str = "I couldn't generate a valid SQL query for that question.";
pub const NO_ROWS_REPLY: &str = "The query ran but returned no rows.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Sql(String),
    Table(QueryOutput),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub body: Body,
}

impl Message {
    fn assistant(body: Body) -> Self {
        Self {
            role: Role::Assistant,
            body,
        }
    }

    /// Terminal rendering of this message
    pub fn render(&self) -> String {
        match (&self.role, &self.body) {
            (Role::User, Body::Text(text)) => format!("{} {}", "you>".bold(), text),
            (_, Body::Text(text)) => text.clone(),
            (_, Body::Sql(sql)) => format!(
                "{}\n{}",
                output::label("Generated SQL:"),
                output::sql(sql)
            ),
            (_, Body::Table(out)) => output::table(out),
            (_, Body::Error(err)) => output::error(err),
        }
    }
}

/// Result of answering one question
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The model produced nothing usable
    NoSql,
    /// The SQL was rejected or failed on the server
    Failed { sql: String, error: String },
    /// The SQL ran and returned no rows
    Empty { sql: String },
    Rows { sql: String, output: QueryOutput },
}

impl Outcome {
    pub fn sql(&self) -> Option<&str> {
        match self {
            Outcome::NoSql => None,
            Outcome::Failed { sql, .. } | Outcome::Empty { sql } | Outcome::Rows { sql, .. } => {
                Some(sql)
            }
        }
    }

    /// Assistant messages reporting this outcome
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Outcome::NoSql => vec![Message::assistant(Body::Text(NO_SQL_REPLY.into()))],
            Outcome::Failed { sql, error } => vec![
                Message::assistant(Body::Sql(sql)),
                Message::assistant(Body::Error(format!("SQL execution failed: {error}"))),
            ],
            Outcome::Empty { sql } => vec![
                Message::assistant(Body::Sql(sql)),
                Message::assistant(Body::Text(NO_ROWS_REPLY.into())),
            ],
            Outcome::Rows { sql, output } => vec![
                Message::assistant(Body::Sql(sql)),
                Message::assistant(Body::Table(output)),
            ],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            role: Role::User,
            body: Body::Text(text.into()),
        });
    }

    /// Record a failure that left the question unanswered
    pub fn push_error(&mut self, text: impl Into<String>) -> &Message {
        self.messages.push(Message::assistant(Body::Error(text.into())));
        &self.messages[self.messages.len() - 1]
    }

    /// Append the assistant reply for `outcome`, returning the new messages
    pub fn record(&mut self, outcome: Outcome) -> &[Message] {
        let start = self.messages.len();
        self.messages.extend(outcome.into_messages());
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of questions asked so far
    pub fn questions(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
