//! Transcript output: a file when requested, stdout otherwise.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Write the finished transcript.
///
/// With an output path the text is written as UTF-8, overwriting any existing
/// file, and a confirmation line is logged when verbose. Without one the text
/// goes to stdout followed by a newline. Filesystem errors surface as
/// `OutputWrite`; there is no recovery.
pub fn emit(text: &str, output_path: Option<&Path>, verbose: bool) -> Result<()> {
    match output_path {
        Some(path) => {
            fs::write(path, text).map_err(|source| Error::OutputWrite {
                path: path.display().to_string(),
                source,
            })?;
            if verbose {
                info!("transcript saved to {}", path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{text}").map_err(|source| Error::OutputWrite {
                path: "<stdout>".to_owned(),
                source,
            })?;
        }
    }

    Ok(())
}
