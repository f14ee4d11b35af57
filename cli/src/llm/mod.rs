//! Natural-language to SQL translation
//!
//! The schema document from `sqlchat-core` is handed to a language model as
//! opaque grounding text together with the user's question. The model is asked
//! for a single JSON object carrying the SQL.

mod gemini;
mod parse;
mod prompt;

pub use gemini::GeminiTranslator;
pub use parse::parse_translation;
pub use prompt::{Prompt, build_prompt};

use thiserror::Error;

/// SQL proposed by the model for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub sql: String,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request to the model failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text")]
    EmptyResponse,

    /// The reply held no usable `{"sql": ...}` object
    #[error("could not read SQL from model reply: {0}")]
    Unparseable(String),
}

/// Turns a question plus schema document into SQL
pub trait SqlTranslator {
    fn translate(&self, question: &str, schema: &str) -> Result<Translation, TranslateError>;
}

impl<T: SqlTranslator + ?Sized> SqlTranslator for &T {
    fn translate(&self, question: &str, schema: &str) -> Result<Translation, TranslateError> {
        (**self).translate(question, schema)
    }
}

impl<T: SqlTranslator + ?Sized> SqlTranslator for Box<T> {
    fn translate(&self, question: &str, schema: &str) -> Result<Translation, TranslateError> {
        (**self).translate(question, schema)
    }
}
