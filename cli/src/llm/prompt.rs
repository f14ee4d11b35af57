use serde_json::json;

const SYSTEM_PROMPT: &str = "\
You are a helpful assistant specialized in converting natural language questions into SQL queries.
The user will provide a `Human Question` and a `Database Schema`.
Your task is to generate the corresponding `SQL Query` that correctly answers the question based on the provided schema.
Your output must be a JSON object in the following format:
{\"sql\": \"<GENERATED_SQL_QUERY>\"}
Do not include any explanations, comments, or additional text. Only return the JSON object.";

/// System and user messages for one translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the request text for `question` against `schema`
pub fn build_prompt(question: &str, schema: &str) -> Prompt {
    let output_schema = json!({
        "title": "Translation",
        "type": "object",
        "properties": {
            "sql": {
                "type": "string",
                "minLength": 5,
                "description": "The SQL statement that answers the question."
            }
        },
        "required": ["sql"]
    });

    let output_schema = output_schema.to_string();
    let user = [
        "## Human Question:",
        question.trim(),
        "",
        "## Database Schema:",
        schema.trim(),
        "",
        "## Output Schema:",
        output_schema.as_str(),
        "",
        "## Answer:",
        "```json",
    ]
    .join("\n");

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}
