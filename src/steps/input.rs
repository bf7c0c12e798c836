use crate::{Error, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read all of stdin, or nothing when stdin is an interactive terminal.
pub fn read_stdin() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut input = String::new();
    stdin
        .lock()
        .read_to_string(&mut input)
        .map_err(|source| Error::Input {
            path: STDIN_PATH.to_string(),
            source,
        })?;
    Ok(input)
}

/// Read the text of an input file, or stdin for `-`.
pub fn get_input_text(input_path: &str) -> Result<String> {
    if input_path == STDIN_PATH {
        return read_stdin();
    }

    std::fs::read_to_string(input_path).map_err(|source| Error::Input {
        path: input_path.to_string(),
        source,
    })
}

/// Paths listed one per line; blank lines and `#` comments are skipped.
pub fn read_input_file_list(list_path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(list_path).map_err(|source| Error::Input {
        path: list_path.display().to_string(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_input_text_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}\n").unwrap();

        let text = get_input_text(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "fn main() {}\n");
    }

    #[test]
    fn test_get_input_text_missing_file() {
        let result = get_input_text("/nonexistent/input.txt");
        match result {
            Err(Error::Input { path, .. }) => assert_eq!(path, "/nonexistent/input.txt"),
            other => panic!("Expected Input error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_input_file_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# files to reshape").unwrap();
        writeln!(file, "src/a.kt").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  src/b.kt  ").unwrap();

        let paths = read_input_file_list(file.path()).unwrap();
        assert_eq!(paths, vec!["src/a.kt", "src/b.kt"]);
    }
}
