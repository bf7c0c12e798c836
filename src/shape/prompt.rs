use crate::steps::input::STDIN_PATH;
use crate::{Error, Result};

const SUPPLEMENTS: &[&str] = &[
    "The subject of the Instruction is the area enclosed by the textforge-input tag.",
    "The result should be returned in the language of the Instruction, but if the Instruction has a language specification, that language should be given priority.",
    "Only results should be returned and no explanation or supplementary information is required, but additional explanation or details should be provided if explicitly requested in the instructions.",
];

/// Resolve the instruction text: inline prompt first, then the prompt file.
///
/// A prompt path of `-` is read through `read_stdin`.
pub fn get_prompt_text(
    prompt: Option<&str>,
    prompt_path: Option<&str>,
    read_stdin: impl FnOnce() -> Result<String>,
) -> Result<String> {
    let prompt = prompt.filter(|p| !p.is_empty());
    let prompt_path = prompt_path.filter(|p| !p.is_empty());

    match (prompt, prompt_path) {
        (Some(prompt), _) => Ok(prompt.to_string()),
        (None, Some(STDIN_PATH)) => read_stdin(),
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|source| Error::Input {
            path: path.to_string(),
            source,
        }),
        (None, None) => Err(Error::PromptRequired),
    }
}

/// Prompt sent to the model for `input`.
///
/// A bare instruction with no input is sent as-is unless optimization is on.
pub fn make_shape_prompt(
    prompt_optimize: bool,
    input_path: &str,
    prompt: &str,
    input: &str,
) -> String {
    if input.is_empty() && !prompt_optimize {
        return prompt.to_string();
    }
    optimize_prompt(input_path, prompt, input)
}

/// Wrap the instruction and input in tags so the model can tell them apart.
pub fn optimize_prompt(input_path: &str, prompt: &str, input: &str) -> String {
    let header = if !input_path.is_empty() && input_path != STDIN_PATH {
        format!("filepath=\"{}\"\n", input_path)
    } else {
        String::new()
    };

    format!(
        "<Instruction>{}. ({})</Instruction>\n{}<textforge-input>\n{}\n</textforge-input>",
        prompt,
        SUPPLEMENTS.join(" "),
        header,
        input
    )
}
