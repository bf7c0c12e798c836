use crate::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;

/// Write `output_text` to `outpath`, replacing any existing content.
///
/// Newly created files are readable by the owner only.
pub fn write_result(output_text: &str, outpath: &str) -> Result<()> {
    let to_error = |source| Error::Output {
        path: outpath.to_string(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(outpath).map_err(to_error)?;
    file.write_all(output_text.as_bytes()).map_err(to_error)?;
    Ok(())
}
