use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("prompt is required")]
    PromptRequired,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to get API key: {0}")]
    ApiKey(String),

    #[error("Failed to read input {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write result to {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected status code: {status} '{message}'")]
    Api { status: u16, message: String },

    #[error("no choices in chat completion")]
    NoChoices,

    #[error("Aborted by user")]
    Aborted,
}

impl Error {
    /// Process exit code reported by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PromptRequired | Error::Config(_) => 2,
            Error::Aborted => 130,
            _ => 1,
        }
    }
}
