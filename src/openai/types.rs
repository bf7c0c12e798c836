use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response format requested from the model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub type_: String,
}

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateChatCompletion {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logit_bias: Option<HashMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
}

const JSON_SYSTEM_PROMPT: &str = "You are a helpful assistant designed to output JSON.";

impl CreateChatCompletion {
    /// Single-prompt request with a fixed seed and one choice.
    pub fn new(
        model: &str,
        prompt: &str,
        max_tokens: Option<u32>,
        response_format_json: bool,
    ) -> Self {
        let mut request = Self {
            model: model.to_string(),
            n: Some(1),
            seed: Some(0),
            max_tokens,
            ..Default::default()
        };

        if response_format_json {
            request.response_format = Some(ResponseFormat {
                type_: "json_object".to_string(),
            });
            request.messages = vec![
                ChatMessage::system(JSON_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ];
        } else {
            request.messages = vec![ChatMessage::user(prompt)];
        }

        request
    }
}

/// One generated choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub finish_reason: Option<String>,
    pub index: u32,
    pub message: Option<ChatMessage>,
}

/// Token accounting for a completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Response body of `POST /chat/completions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatCompletion {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub system_fingerprint: Option<String>,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

/// Error body returned with a non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Can be a string, a number, or null depending on the error.
    pub param: Value,
    pub code: Option<String>,
}
