use crate::apikey::DEFAULT_API_KEY_FILE;
use crate::openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::steps::{read_input_file_list, STDIN_PATH};
use crate::{Error, Result};
use std::path::PathBuf;

/// Settings for one run over a set of inputs
#[derive(Debug, Clone)]
pub struct Config {
    pub prompt: Option<String>,
    pub prompt_path: Option<String>,
    pub prompt_optimize: bool,
    pub model: String,
    pub max_tokens: Option<u32>,
    pub dry_run: bool,
    pub silent: bool,
    pub verbose: bool,
    pub diff: bool,
    pub input_file_list: Option<PathBuf>,
    /// Extra log level for the OpenAI client (e.g. "info", "debug")
    pub log_api_level: Option<String>,
    pub rewrite: bool,
    pub outpath: Option<String>,
    pub use_first_code_block: bool,
    pub confirm: bool,
    pub api_key_file: String,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: None,
            prompt_path: None,
            prompt_optimize: true,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
            dry_run: false,
            silent: false,
            verbose: false,
            diff: false,
            input_file_list: None,
            log_api_level: None,
            rewrite: false,
            outpath: None,
            use_first_code_block: false,
            confirm: false,
            api_key_file: DEFAULT_API_KEY_FILE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

impl Config {
    /// Positional inputs followed by those from the input file list.
    ///
    /// Falls back to stdin when nothing is given.
    pub fn collect_inputs(&self, positional: Vec<String>) -> Result<Vec<String>> {
        let mut inputs = positional;
        if let Some(list) = &self.input_file_list {
            inputs.extend(read_input_file_list(list)?);
        }
        if inputs.is_empty() {
            inputs.push(STDIN_PATH.to_string());
        }
        Ok(inputs)
    }

    pub fn validate(&self, inputs: &[String]) -> Result<()> {
        if !is_set(&self.prompt) && !is_set(&self.prompt_path) {
            return Err(Error::PromptRequired);
        }
        if self.rewrite && is_set(&self.outpath) {
            return Err(Error::Config(
                "--rewrite and --outpath cannot be used together".to_string(),
            ));
        }
        if self.rewrite && inputs.iter().any(|i| i == STDIN_PATH) {
            return Err(Error::Config("--rewrite requires input files".to_string()));
        }
        if !is_set(&self.prompt)
            && self.prompt_path.as_deref() == Some(STDIN_PATH)
            && inputs.iter().any(|i| i == STDIN_PATH)
        {
            return Err(Error::Config(
                "stdin cannot supply both the prompt and the input".to_string(),
            ));
        }
        if is_set(&self.outpath) && inputs.len() > 1 {
            return Err(Error::Config(
                "--outpath accepts a single input only".to_string(),
            ));
        }
        Ok(())
    }

    /// Tracing filter directives for this run.
    pub fn log_directives(&self, log_level: &str) -> String {
        let level = if self.verbose { "debug" } else { log_level };
        match &self.log_api_level {
            Some(api_level) => format!("{},textforge::openai={}", level, api_level),
            None => level.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn with_prompt() -> Config {
        Config {
            prompt: Some("fix typos".to_string()),
            ..Default::default()
        }
    }

    fn inputs(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model, "gpt-4o");
        assert!(config.prompt_optimize);
        assert_eq!(config.api_key_file, "~/.openai-apikey");
    }

    #[test]
    fn test_validate_requires_prompt() {
        let config = Config {
            prompt: Some(String::new()),
            ..Default::default()
        };
        assert_matches!(config.validate(&inputs(&["a.txt"])), Err(Error::PromptRequired));

        let from_file = Config {
            prompt_path: Some("prompt.txt".to_string()),
            ..Default::default()
        };
        assert!(from_file.validate(&inputs(&["a.txt"])).is_ok());
    }

    #[test]
    fn test_validate_rewrite_rules() {
        let config = Config {
            rewrite: true,
            ..with_prompt()
        };
        assert!(config.validate(&inputs(&["a.txt", "b.txt"])).is_ok());
        assert_matches!(config.validate(&inputs(&["-"])), Err(Error::Config(_)));

        let both = Config {
            outpath: Some("out.txt".to_string()),
            ..config
        };
        assert_matches!(both.validate(&inputs(&["a.txt"])), Err(Error::Config(_)));
    }

    #[test]
    fn test_validate_outpath_single_input() {
        let config = Config {
            outpath: Some("out.txt".to_string()),
            ..with_prompt()
        };
        assert!(config.validate(&inputs(&["a.txt"])).is_ok());
        assert_matches!(
            config.validate(&inputs(&["a.txt", "b.txt"])),
            Err(Error::Config(_))
        );
    }

    #[test]
    fn test_validate_stdin_prompt_and_input() {
        let config = Config {
            prompt_path: Some("-".to_string()),
            ..Default::default()
        };
        assert!(config.validate(&inputs(&["a.txt"])).is_ok());
        assert_matches!(config.validate(&inputs(&["-"])), Err(Error::Config(_)));

        // an inline prompt means stdin is left for the input
        let inline = Config {
            prompt: Some("fix typos".to_string()),
            ..config
        };
        assert!(inline.validate(&inputs(&["-"])).is_ok());
    }

    #[test]
    fn test_collect_inputs_defaults_to_stdin() {
        let inputs = with_prompt().collect_inputs(Vec::new()).unwrap();
        assert_eq!(inputs, vec!["-"]);
    }

    #[test]
    fn test_collect_inputs_appends_list() {
        let mut list = NamedTempFile::new().unwrap();
        writeln!(list, "b.kt\nc.kt").unwrap();

        let config = Config {
            input_file_list: Some(list.path().to_path_buf()),
            ..with_prompt()
        };
        let inputs = config.collect_inputs(vec!["a.kt".to_string()]).unwrap();
        assert_eq!(inputs, vec!["a.kt", "b.kt", "c.kt"]);
    }

    #[test]
    fn test_log_directives() {
        let mut config = with_prompt();
        assert_eq!(config.log_directives("warn"), "warn");

        config.log_api_level = Some("debug".to_string());
        assert_eq!(config.log_directives("warn"), "warn,textforge::openai=debug");

        config.verbose = true;
        assert_eq!(config.log_directives("warn"), "debug,textforge::openai=debug");
    }
}
