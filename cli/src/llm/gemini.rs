use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{SqlTranslator, TranslateError, Translation, build_prompt, parse_translation};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Google Gemini `generateContent` over blocking HTTP
#[derive(Debug, Clone)]
pub struct GeminiTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiTranslator {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Raw reply text for one question
    fn generate(&self, question: &str, schema: &str) -> Result<String, TranslateError> {
        let prompt = build_prompt(question, schema);
        let body = json!({
            "systemInstruction": { "parts": [{ "text": prompt.system }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt.user }] }],
            "generationConfig": { "responseMimeType": "text/plain" },
        });

        tracing::debug!(model = %self.model, "requesting translation");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message: api_error_message(&message),
            });
        }

        let reply: GenerateContentResponse = response.json()?;
        reply.text().ok_or(TranslateError::EmptyResponse)
    }
}

impl SqlTranslator for GeminiTranslator {
    fn translate(&self, question: &str, schema: &str) -> Result<Translation, TranslateError> {
        let text = self.generate(question, schema)?;
        tracing::debug!(reply = %text, "model reply");
        parse_translation(&text)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// `error.message` from a Google API error body, or the body itself
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_endpoint_and_model() {
        let t = GeminiTranslator::new("https://example.test/v1beta/", "gemini-2.5-flash", "k")
            .unwrap();
        assert_eq!(
            t.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn response_text_concatenates_parts() {
        let reply: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [
                {"text": "{\"sql\": "}, {"text": "\"SELECT 1 AS x\"}"}
            ]}}]}"#,
        )
        .unwrap();
        assert_eq!(reply.text().as_deref(), Some(r#"{"sql": "SELECT 1 AS x"}"#));
    }

    #[test]
    fn blocked_response_has_no_text() {
        let reply: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert_eq!(reply.text(), None);
    }

    #[test]
    fn api_error_message_prefers_json_message() {
        assert_eq!(
            api_error_message(r#"{"error": {"code": 400, "message": "API key not valid"}}"#),
            "API key not valid"
        );
        assert_eq!(api_error_message("Bad Gateway\n"), "Bad Gateway");
    }
}
