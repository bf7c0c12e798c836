use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};

/// Line diff of two texts with `-`, `+` or ` ` in front of every line.
pub fn diff(left_text: &str, right_text: &str) -> String {
    let mut out = String::new();
    for change in TextDiff::from_lines(left_text, right_text).iter_all_changes() {
        out.push_str(&format!("{}{}", change.tag(), change.value()));
        if change.missing_newline() {
            out.push('\n');
        }
    }
    out
}

/// Character counts of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSize {
    pub changed: bool,
    pub added: usize,
    pub removed: usize,
}

pub fn diff_size(left_text: &str, right_text: &str) -> DiffSize {
    let mut added = 0;
    let mut removed = 0;
    for change in TextDiff::from_chars(left_text, right_text).iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += change.value().chars().count(),
            ChangeTag::Delete => removed += change.value().chars().count(),
            ChangeTag::Equal => {}
        }
    }

    DiffSize {
        changed: added > 0 || removed > 0,
        added,
        removed,
    }
}

/// Print the result, followed by a diff against the input when asked.
pub fn print_result<W: Write>(
    out: &mut W,
    output_text: &str,
    input_text: &str,
    use_diff: bool,
) -> io::Result<()> {
    write!(out, "{}", output_text)?;

    if use_diff {
        writeln!(
            out,
            "\n====begin of diff==== in size: {}, out size: {}",
            input_text.len(),
            output_text.len()
        )?;
        write!(out, "{}", diff(input_text, output_text))?;
        writeln!(out, "====end of diff====")?;
    }
    out.flush()
}
