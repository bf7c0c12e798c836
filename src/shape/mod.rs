pub mod prompt;
pub mod response;

pub use prompt::{get_prompt_text, make_shape_prompt, optimize_prompt};
pub use response::{find_markdown_first_code_block, optimize_response_result};

use crate::openai::{ChatClient, ChatCompletion};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::debug;

/// Outcome of shaping one input
#[derive(Debug, Clone)]
pub struct ShapeResult {
    pub prompt: String,
    pub completion: Option<ChatCompletion>,
    pub raw_result: String,
    pub result: String,
}

impl ShapeResult {
    /// `result` always ends with a newline.
    pub fn new(
        prompt: String,
        completion: Option<ChatCompletion>,
        raw_result: String,
        mut result: String,
    ) -> Self {
        if !result.ends_with('\n') {
            result.push('\n');
        }
        Self {
            prompt,
            completion,
            raw_result,
            result,
        }
    }
}

/// Turns an instruction and an input into the model's rewritten text
pub struct Shaper {
    client: Arc<dyn ChatClient>,
    use_first_code_block: bool,
    prompt_optimize: bool,
}

impl Shaper {
    pub fn new(
        client: Arc<dyn ChatClient>,
        use_first_code_block: bool,
        prompt_optimize: bool,
    ) -> Self {
        Self {
            client,
            use_first_code_block,
            prompt_optimize,
        }
    }

    pub fn make_shape_prompt(&self, input_path: &str, prompt: &str, input: &str) -> String {
        make_shape_prompt(self.prompt_optimize, input_path, prompt, input)
    }

    pub async fn shape(&self, prompt: &str) -> Result<ShapeResult> {
        let request = self.client.make_create_chat_completion(prompt);
        let completion = self.client.request_create_chat_completion(&request).await?;

        let raw_result = completion
            .choices
            .first()
            .ok_or(Error::NoChoices)?
            .message
            .as_ref()
            .map(|m| m.content.clone())
            .unwrap_or_default();
        debug!("raw result: {} bytes", raw_result.len());

        let result = optimize_response_result(&raw_result, self.use_first_code_block);
        Ok(ShapeResult::new(
            prompt.to_string(),
            Some(completion),
            raw_result,
            result,
        ))
    }
}
