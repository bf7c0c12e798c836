use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_API_KEY_FILE: &str = "~/.openai-apikey";

/// OpenAI API key; never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Load the key from `OPENAI_API_KEY`, falling back to `key_file`.
pub fn get_api_key(key_file: &str) -> Result<ApiKey> {
    resolve_api_key(std::env::var(API_KEY_ENV).ok(), key_file)
}

fn resolve_api_key(env_value: Option<String>, key_file: &str) -> Result<ApiKey> {
    if let Some(key) = env_value.map(|v| v.trim().to_string()) {
        if !key.is_empty() {
            debug!("Using API key from {}", API_KEY_ENV);
            return Ok(ApiKey(key));
        }
    }

    let path = PathBuf::from(shellexpand::tilde(key_file).into_owned());
    debug!("Reading API key from {}", path.display());

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| Error::ApiKey(format!("{}: {}", path.display(), e)))?;
    let key = contents.trim();
    if key.is_empty() {
        return Err(Error::ApiKey(format!("{} is empty", path.display())));
    }

    Ok(ApiKey(key.to_string()))
}
