use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal, Write};
use std::path::Path;
use tracing::debug;

/// Controlling terminal of the process.
pub const TTY_PATH: &str = "/dev/tty";

/// Ask a yes/no question until answered; EOF or an empty line means no.
pub fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<bool> {
    loop {
        write!(writer, "{} [y/N]: ", message)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim().to_lowercase().chars().next() {
            None => return Ok(false),
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            Some(_) => continue,
        }
    }
}

/// Source of answers: the terminal at `tty_path` when stdin is piped,
/// otherwise stdin itself.
pub fn answer_reader(stdin_is_terminal: bool, tty_path: &Path) -> Box<dyn BufRead> {
    if !stdin_is_terminal {
        match File::open(tty_path) {
            Ok(tty) => return Box::new(BufReader::new(tty)),
            Err(e) => debug!(
                "Cannot open {}: {}, reading answers from stdin",
                tty_path.display(),
                e
            ),
        }
    }
    Box::new(std::io::stdin().lock())
}

/// [`confirm`] on stderr, answered from the user's terminal.
pub fn confirm_on_terminal(message: &str) -> Result<bool> {
    let mut reader = answer_reader(std::io::stdin().is_terminal(), Path::new(TTY_PATH));
    confirm(&mut reader, &mut std::io::stderr(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn ask(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut writer = Vec::new();
        let answer = confirm(&mut reader, &mut writer, "Write file?").unwrap();
        (answer, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        assert!(ask("y\n").0);
        assert!(ask("Yes\n").0);
    }

    #[test]
    fn test_no_answers() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn test_reasks_on_unrecognized_answer() {
        let (answer, prompt) = ask("maybe\ny\n");
        assert!(answer);
        assert_eq!(prompt, "Write file? [y/N]: Write file? [y/N]: ");
    }

    #[test]
    fn test_piped_stdin_reads_answer_from_tty() {
        let mut tty = NamedTempFile::new().unwrap();
        writeln!(tty, "y").unwrap();

        let mut reader = answer_reader(false, tty.path());
        let mut writer = Vec::new();
        assert!(confirm(&mut reader, &mut writer, "Overwrite?").unwrap());
        assert_eq!(String::from_utf8(writer).unwrap(), "Overwrite? [y/N]: ");
    }
}
