pub mod apikey;
pub mod error;
pub mod openai;
pub mod runner;
pub mod sample;
pub mod schema;
pub mod shape;
pub mod steps;

pub use error::Error;
pub use runner::{Config, Runner};

pub type Result<T> = std::result::Result<T, Error>;

use openai::{ChatClient, OpenAiClient};
use std::sync::Arc;

/// Shape every input with the configured model.
///
/// No API key is needed for dry runs, since nothing is sent.
pub async fn run(config: Config, inputs: Vec<String>) -> Result<openai::TotalUsageCost> {
    let inputs = config.collect_inputs(inputs)?;
    config.validate(&inputs)?;

    let client: Option<Arc<dyn ChatClient>> = if config.dry_run {
        None
    } else {
        let api_key = apikey::get_api_key(&config.api_key_file)?;
        Some(Arc::new(OpenAiClient::with_base_url(
            api_key,
            &config.model,
            config.max_tokens,
            &config.base_url,
        )?))
    };

    Runner::new(config, client).run(&inputs).await
}
