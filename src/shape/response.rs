use regex::Regex;
use std::sync::LazyLock;

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?s)```[a-zA-Z0-9]*?\n(.*?\n)```").expect("code block pattern is valid")
});

/// Contents of the first fenced code block, if any.
pub fn find_markdown_first_code_block(text: &str) -> Option<&str> {
    CODE_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Strip a fence wrapping the whole reply, then optionally keep only the
/// first code block.
pub fn optimize_response_result(raw_result: &str, use_first_code_block: bool) -> String {
    let mut result = raw_result.to_string();

    if result.starts_with("```") && result.ends_with("```") {
        let lines: Vec<&str> = result.split('\n').collect();
        if lines.len() > 2 {
            result = lines[1..lines.len() - 1].join("\n");
        }
    }

    if use_first_code_block {
        if let Some(block) = find_markdown_first_code_block(&result) {
            result = block.to_string();
        }
    }

    result
}
