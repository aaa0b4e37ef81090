//! The `check` command: report illegal characters and fail if there are any.

use std::io::Write;
use std::path::Path;

use clex_lexer::TokenKind;
use tracing::debug;

use super::read_source;
use crate::error::CliResult;
use crate::report::LexSummary;

/// Scan `path` and list every illegal character on `err`.
///
/// Prints an `OK` line on `out` when the file is clean. Returns the summary;
/// the caller treats a non-zero `illegal` count as failure.
pub fn check_file(
    path: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> CliResult<LexSummary> {
    let source = read_source(path)?;
    let tokens = clex_lexer::lex(&source);

    for tok in tokens.iter().filter(|t| t.kind == TokenKind::Illegal) {
        writeln!(
            err,
            "{}:{}: illegal character '{}'",
            path.display(),
            tok.line,
            tok.text.escape_debug()
        )?;
    }

    let summary = LexSummary::from_tokens(&tokens);
    debug!(path = %path.display(), illegal = summary.illegal, "check");

    if summary.illegal == 0 {
        writeln!(out, "OK: {} ({} tokens)", path.display(), summary.tokens)?;
    }
    Ok(summary)
}
