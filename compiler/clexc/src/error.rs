//! Errors surfaced by the command line.
//!
//! The scanner itself never fails; everything here is I/O or usage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Largest source the scanner can address; token offsets are `u32`.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", read_message(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "'{}' is too large to scan ({len} bytes, limit {} bytes)",
        .path.display(),
        MAX_SOURCE_LEN
    )]
    TooLarge { path: PathBuf, len: usize },
    #[error("error writing to terminal: {0}")]
    Terminal(#[from] io::Error),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

fn read_message(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests;
