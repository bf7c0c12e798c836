use super::client_trait::ChatClient;
use super::types::{ChatCompletion, CreateChatCompletion, ErrorResponse};
use crate::apikey::ApiKey;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

/// OpenAI chat-completions client over HTTPS
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    model: String,
    max_tokens: Option<u32>,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: ApiKey, model: &str, max_tokens: Option<u32>) -> Result<Self> {
        Self::with_base_url(api_key, model, max_tokens, DEFAULT_BASE_URL)
    }

    /// Point the client at a compatible endpoint, e.g. a proxy or a local fake.
    pub fn with_base_url(
        api_key: ApiKey,
        model: &str,
        max_tokens: Option<u32>,
        base_url: &str,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key,
            model: model.to_string(),
            max_tokens,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn decode_completion(body: &str) -> Result<ChatCompletion> {
        let comp: ChatCompletion = serde_json::from_str(body)?;

        info!(
            "ID: {}, Object: {}, Created: {}, Model: {}, SystemFingerprint: {}, ChoicesCount: {}",
            comp.id,
            comp.object,
            comp.created,
            comp.model,
            comp.system_fingerprint.as_deref().unwrap_or(""),
            comp.choices.len()
        );
        if let Some(first) = comp.choices.first() {
            info!(
                "[0]FinishReason: {}, Index: {}",
                first.finish_reason.as_deref().unwrap_or(""),
                first.index
            );
        }
        debug!("responseBody: {}", body);

        Ok(comp)
    }

    fn decode_error(status: u16, body: &str) -> Error {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(resp) => resp.error.message,
            Err(e) => {
                warn!("Failed to decode error response: {}", e);
                body.trim().to_string()
            }
        };
        Error::Api { status, message }
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    fn make_create_chat_completion(&self, prompt: &str) -> CreateChatCompletion {
        CreateChatCompletion::new(&self.model, prompt, self.max_tokens, false)
    }

    async fn request_create_chat_completion(
        &self,
        request: &CreateChatCompletion,
    ) -> Result<ChatCompletion> {
        info!(
            "model: {}, N: {:?}, Seed: {:?}, ResponseFormat: {:?}",
            request.model,
            request.n,
            request.seed,
            request.response_format.as_ref().map(|f| f.type_.as_str())
        );
        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!("createChatCompletion: {}", serde_json::to_string(request)?);
        }

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::decode_error(status.as_u16(), &body));
        }

        Self::decode_completion(&body)
    }
}
