//! Command-line options for `clex lex`.

use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Source file read when no input path is given.
pub const DEFAULT_INPUT: &str = "code.txt";
/// Token table written when no `-o` is given.
pub const DEFAULT_OUTPUT: &str = "result.txt";

/// Options for scanning one file into a token table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Source file to scan.
    pub input: PathBuf,
    /// Where the token table is written.
    pub output: PathBuf,
    /// Echo the table to stdout as well as writing the file.
    pub echo: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            echo: true,
        }
    }
}

impl LexOptions {
    /// Parse the arguments following `clex lex`.
    ///
    /// Accepts one optional positional input path, `-o <path>`,
    /// `--output <path>`, `--output=<path>` and `-q`/`--quiet`, in any order.
    pub fn parse(args: &[String]) -> CliResult<Self> {
        let mut options = Self::default();
        let mut input_seen = false;
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-o" | "--output" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                    options.output = PathBuf::from(value);
                }
                "-q" | "--quiet" => options.echo = false,
                _ => {
                    if let Some(value) = arg.strip_prefix("--output=") {
                        if value.is_empty() {
                            return Err(CliError::MissingValue("--output".to_string()));
                        }
                        options.output = PathBuf::from(value);
                    } else if arg.starts_with('-') {
                        return Err(CliError::UnknownOption(arg.clone()));
                    } else if input_seen {
                        return Err(CliError::UnexpectedArgument(arg.clone()));
                    } else {
                        options.input = PathBuf::from(arg);
                        input_seen = true;
                    }
                }
            }
        }

        Ok(options)
    }
}
