use clap::Parser;
use std::path::PathBuf;
use textforge::apikey::DEFAULT_API_KEY_FILE;
use textforge::openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use textforge::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textforge")]
#[command(
    about = "Shape and transform text using OpenAI's GPT models",
    version,
    long_about = None
)]
struct Cli {
    /// Input files; reads stdin when none are given
    inputs: Vec<String>,

    /// Prompt text
    #[arg(short = 'p', long)]
    prompt: Option<String>,

    /// Prompt file path ("-" for stdin)
    #[arg(short = 'P', long)]
    prompt_path: Option<String>,

    /// Send the prompt and input without the wrapping instructions
    #[arg(short = 'N', long)]
    no_prompt_optimize: bool,

    /// Model name
    #[arg(short = 'm', long, env = "TEXTFORGE_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Maximum tokens to generate
    #[arg(short = 't', long)]
    max_tokens: Option<u32>,

    /// Build the prompt without calling the API
    #[arg(short = 'D', long)]
    dry_run: bool,

    /// Do not print results
    #[arg(short = 's', long)]
    silent: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Show a diff between input and result
    #[arg(short = 'd', long)]
    diff: bool,

    /// File listing input paths, one per line
    #[arg(short = 'i', long)]
    input_file_list: Option<PathBuf>,

    /// Log level for OpenAI API traffic (info, debug)
    #[arg(short = 'l', long)]
    log_api_level: Option<String>,

    /// Rewrite the input files with the results
    #[arg(short = 'r', long)]
    rewrite: bool,

    /// Output file path
    #[arg(short = 'o', long)]
    outpath: Option<String>,

    /// Use the first code block in the model's answer
    #[arg(short = 'f', long)]
    use_first_code_block: bool,

    /// Ask before writing each result
    #[arg(short = 'c', long)]
    confirm: bool,

    /// File holding the API key when OPENAI_API_KEY is unset
    #[arg(long, env = "TEXTFORGE_API_KEY_FILE", default_value = DEFAULT_API_KEY_FILE)]
    api_key_file: String,

    /// Base URL of the chat completions API
    #[arg(long, env = "TEXTFORGE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn into_parts(self) -> (Config, Vec<String>, String) {
        let config = Config {
            prompt: self.prompt,
            prompt_path: self.prompt_path,
            prompt_optimize: !self.no_prompt_optimize,
            model: self.model,
            max_tokens: self.max_tokens,
            dry_run: self.dry_run,
            silent: self.silent,
            verbose: self.verbose,
            diff: self.diff,
            input_file_list: self.input_file_list,
            log_api_level: self.log_api_level,
            rewrite: self.rewrite,
            outpath: self.outpath,
            use_first_code_block: self.use_first_code_block,
            confirm: self.confirm,
            api_key_file: self.api_key_file,
            base_url: self.base_url,
        };
        (config, self.inputs, self.log_level)
    }
}

#[tokio::main]
async fn main() {
    let (config, inputs, log_level) = Cli::parse().into_parts();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directives(&log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = textforge::run(config, inputs).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
