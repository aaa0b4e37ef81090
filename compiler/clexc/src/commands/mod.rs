//! Command handlers for the clex CLI.
//!
//! Each handler takes its output streams as parameters so it can be driven
//! from tests. Shared file helpers live here in the module root.

use std::fs;
use std::path::Path;

use crate::error::{CliError, CliResult, MAX_SOURCE_LEN};

mod check;
mod lex;

pub use check::check_file;
pub use lex::lex_file;

/// Read a whole source file into memory.
///
/// The scanner needs the complete text up front; there is no streaming input.
/// Files longer than [`MAX_SOURCE_LEN`] bytes are rejected.
pub fn read_source(path: &Path) -> CliResult<String> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    check_source_len(path, source.len())?;
    Ok(source)
}

/// Fail with [`CliError::TooLarge`] if `len` exceeds [`MAX_SOURCE_LEN`].
pub fn check_source_len(path: &Path, len: usize) -> CliResult<()> {
    if len > MAX_SOURCE_LEN {
        return Err(CliError::TooLarge {
            path: path.to_path_buf(),
            len,
        });
    }
    Ok(())
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> CliResult<()> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
