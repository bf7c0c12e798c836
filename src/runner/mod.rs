//! Drives a run: one shaping request per input, then output and writes.

pub mod config;

pub use config::Config;

use crate::openai::{ChatClient, TotalUsageCost, UsageCost};
use crate::shape::{get_prompt_text, make_shape_prompt, ShapeResult, Shaper};
use crate::steps::{self, STDIN_PATH};
use crate::{Error, Result};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Asks the user a yes/no question
pub type ConfirmFn = Box<dyn FnMut(&str) -> Result<bool> + Send>;

/// Reads everything piped to the process
pub type ReadStdinFn = Box<dyn FnMut() -> Result<String> + Send>;

pub const CONFIRM_MESSAGE: &str = "Continue?";

pub struct Runner {
    config: Config,
    shaper: Option<Shaper>,
    out: Box<dyn Write + Send>,
    confirm: ConfirmFn,
    read_stdin: ReadStdinFn,
}

impl Runner {
    /// `client` may be `None` only for dry runs.
    pub fn new(config: Config, client: Option<Arc<dyn ChatClient>>) -> Self {
        let shaper = client
            .map(|c| Shaper::new(c, config.use_first_code_block, config.prompt_optimize));
        Self {
            config,
            shaper,
            out: Box::new(std::io::stdout()),
            confirm: Box::new(steps::confirm_on_terminal),
            read_stdin: Box::new(steps::read_stdin),
        }
    }

    pub fn with_output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = out;
        self
    }

    pub fn with_confirm(mut self, confirm: ConfirmFn) -> Self {
        self.confirm = confirm;
        self
    }

    /// Source for `-` inputs and a `-` prompt path.
    pub fn with_stdin(mut self, read_stdin: ReadStdinFn) -> Self {
        self.read_stdin = read_stdin;
        self
    }

    pub async fn run(&mut self, inputs: &[String]) -> Result<TotalUsageCost> {
        info!("Starting run over {} input(s)", inputs.len());
        debug!("config: {:?}", self.config);

        let prompt_text = get_prompt_text(
            self.config.prompt.as_deref(),
            self.config.prompt_path.as_deref(),
            || (self.read_stdin)(),
        )?;

        let mut total = TotalUsageCost::default();
        for (i, input_path) in inputs.iter().enumerate() {
            let index = i + 1;
            if let Some(usage) = self.process(index, input_path, &prompt_text).await? {
                total.push(usage);
            }
        }

        log_total_usage(&total);
        Ok(total)
    }

    async fn process(
        &mut self,
        index: usize,
        input_path: &str,
        prompt_text: &str,
    ) -> Result<Option<UsageCost>> {
        info!("[{}] Processing {}", index, input_path);

        let input_text = if input_path == STDIN_PATH {
            (self.read_stdin)()?
        } else {
            steps::get_input_text(input_path)?
        };
        let prompt = make_shape_prompt(
            self.config.prompt_optimize,
            input_path,
            prompt_text,
            &input_text,
        );

        if self.config.dry_run {
            self.report_dry_run(index, input_path, &prompt)?;
            return Ok(None);
        }

        let shaper = self
            .shaper
            .as_ref()
            .ok_or_else(|| Error::Config("no chat client configured".to_string()))?;
        let result = shaper.shape(&prompt).await?;
        info!("[{}] Shaped {}", index, input_path);

        let usage = result.completion.as_ref().map(UsageCost::from_completion);
        self.output(index, input_path, &input_text, &result)?;
        Ok(usage)
    }

    fn report_dry_run(&mut self, index: usize, input_path: &str, prompt: &str) -> Result<()> {
        debug!("[{}] dry-run prompt: '{}'", index, prompt);
        if self.config.silent {
            return Ok(());
        }

        writeln!(self.out, "{}", prompt)?;
        if self.config.rewrite {
            writeln!(self.out, "Rewrite file:{}, dry-run skipped.", input_path)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn output(
        &mut self,
        index: usize,
        input_path: &str,
        input_text: &str,
        result: &ShapeResult,
    ) -> Result<()> {
        debug!(
            "[{}] rawResult: size:{}, '{}'",
            index,
            result.raw_result.len(),
            result.raw_result
        );
        debug!("[{}] resultText: '{}'", index, result.result);

        if !self.config.silent && !self.config.rewrite {
            steps::print_result(&mut self.out, &result.result, input_text, self.config.diff)?;
        }
        if self.config.verbose {
            let size = steps::diff_size(input_text, &result.result);
            debug!(
                "[{}] changed: {}, added: {}, removed: {}",
                index, size.changed, size.added, size.removed
            );
        }

        if self.config.confirm {
            let confirmed = (self.confirm)(CONFIRM_MESSAGE)?;
            debug!("[{}] Confirmation: {}", index, confirmed);
            if !confirmed {
                if input_path == STDIN_PATH {
                    return Err(Error::Aborted);
                }
                warn!("[{}] Skipped writing {}", index, input_path);
                return Ok(());
            }
        }

        let outpath = if self.config.rewrite {
            if !self.config.silent {
                writeln!(self.out, "Rewrite file:{}", input_path)?;
            }
            Some(input_path)
        } else {
            self.config.outpath.as_deref().filter(|p| !p.is_empty())
        };

        if let Some(outpath) = outpath {
            info!("[{}] Writing to file: {}", index, outpath);
            steps::write_result(&result.result, outpath)?;
        }
        Ok(())
    }
}

fn log_total_usage(total: &TotalUsageCost) {
    if total.is_empty() {
        return;
    }

    let cost = |c: Option<f64>| c.map_or_else(|| "unknown".to_string(), |v| format!("${:.6}", v));
    info!(
        "Usage: completions: {}, prompt tokens: {} ({}), completion tokens: {} ({}), total tokens: {} ({})",
        total.len(),
        total.total_prompt_tokens(),
        cost(total.total_prompt_tokens_cost()),
        total.total_completion_tokens(),
        cost(total.total_completion_tokens_cost()),
        total.total_tokens(),
        cost(total.total_tokens_cost())
    );
}
