//! Prompt and request body construction

use crate::error::{Error, Result};
use crate::quiz::QuizParameters;
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Model every request asks for
pub const DEFAULT_MODEL: &str = "meta/llama-3.1-405b-instruct";

/// Token budget sent with every request
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that creates quiz questions.";

/// Substituted when a chat response carries no message content
pub const NO_QUIZ_GENERATED: &str = "No quiz generated.";

/// Shape of the completion service's API.
///
/// The variant also decides how strictly uploads are checked and how the
/// completion is split into questions and answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `POST /chat/completions` with system and user messages
    #[default]
    Chat,
    /// `POST /generate` with a flat prompt field
    Completion,
}

impl Variant {
    /// Path appended to the configured base URL
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Variant::Chat => "/chat/completions",
            Variant::Completion => "/generate",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Chat => "chat",
            Variant::Completion => "completion",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Variant::Chat),
            "completion" | "generate" => Ok(Variant::Completion),
            other => Err(format!("Unknown variant: {} (expected chat or completion)", other)),
        }
    }
}

/// Build the instruction sent to the model.
///
/// The text is embedded whole: no escaping, truncation or chunking.
pub fn build_prompt(text: &str, params: &QuizParameters) -> String {
    format!(
        "Create quiz questions based on the following content.\n\
         The difficulty level is {}.\n\
         The type of quiz question is {}.\n\
         \n\
         Content:\n\
         {}\n",
        params.difficulty, params.question_type, text
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
}

/// JSON body for one quiz generation
///
/// Model and token budget are fixed; only the prompt varies between requests.
pub fn build_request_body(variant: Variant, prompt: String) -> Value {
    let body = match variant {
        Variant::Chat => serde_json::to_value(ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            max_tokens: DEFAULT_MAX_TOKENS,
        }),
        Variant::Completion => serde_json::to_value(CompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            prompt,
            max_tokens: DEFAULT_MAX_TOKENS,
        }),
    };
    // Plain strings and integers always serialize
    body.unwrap_or_default()
}

/// Pull the generated text out of a successful response body
pub fn extract_completion(variant: Variant, body: &Value) -> Result<String> {
    match variant {
        Variant::Chat => Ok(body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .unwrap_or(NO_QUIZ_GENERATED)
            .to_string()),
        Variant::Completion => body
            .get("text")
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or_else(|| Error::MalformedCompletion {
                reason: "response has no \"text\" field".to_string(),
            }),
    }
}
