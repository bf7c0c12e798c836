use super::types::{ChatCompletion, CreateChatCompletion};
use crate::Result;
use async_trait::async_trait;

/// Trait for the chat-completions backend to enable testing with mocks
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Build a request for a single user prompt
    fn make_create_chat_completion(&self, prompt: &str) -> CreateChatCompletion;

    /// Send the request and return the decoded completion
    async fn request_create_chat_completion(
        &self,
        request: &CreateChatCompletion,
    ) -> Result<ChatCompletion>;
}
