pub mod client;
pub mod client_trait;
pub mod pricing;
pub mod types;
pub mod usage;

pub use client::OpenAiClient;
pub use client_trait::ChatClient;
pub use types::{ChatCompletion, ChatMessage, CreateChatCompletion};
pub use usage::{TotalUsageCost, UsageCost};
