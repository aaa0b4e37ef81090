//! Token table rendering.
//!
//! The table has three fixed-width columns (kind, literal text, line)
//! separated by ` | `, under a header and a 60-dash rule:
//!
//! ```text
//! TOKEN TYPE           | LITERAL              | LINE
//! ------------------------------------------------------------
//! INT                  | int                  | 1
//! ```
//!
//! The same text is echoed to the console and written to the output file.

use std::fmt;

use clex_lexer::Token;

/// Width of the kind and literal columns.
const NAME_WIDTH: usize = 20;
/// Width of the line column.
const LINE_WIDTH: usize = 5;
/// Length of the rule under the header.
const RULE_WIDTH: usize = 60;

/// Renders a token stream as a fixed-width table via [`fmt::Display`].
#[derive(Clone, Copy, Debug)]
pub struct TokenTable<'a, 'src> {
    tokens: &'a [Token<'src>],
}

impl<'a, 'src> TokenTable<'a, 'src> {
    pub fn new(tokens: &'a [Token<'src>]) -> Self {
        Self { tokens }
    }
}

impl fmt::Display for TokenTable<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<NAME_WIDTH$} | {:<NAME_WIDTH$} | {:<LINE_WIDTH$}",
            "TOKEN TYPE", "LITERAL", "LINE"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for tok in self.tokens {
            write_row(f, tok)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, tok: &Token<'_>) -> fmt::Result {
    writeln!(
        f,
        "{:<NAME_WIDTH$} | {:<NAME_WIDTH$} | {:<LINE_WIDTH$}",
        tok.kind,
        tok.text,
        tok.line
    )
}

/// Counts reported after a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens produced, including the final `Eof`.
    pub tokens: usize,
    /// Tokens of kind `Illegal`.
    pub illegal: usize,
    /// Line the scan ended on.
    pub lines: u32,
}

impl LexSummary {
    pub fn from_tokens(tokens: &[Token<'_>]) -> Self {
        Self {
            tokens: tokens.len(),
            illegal: tokens.iter().filter(|t| t.kind.is_error()).count(),
            lines: tokens.last().map_or(1, |t| t.line),
        }
    }
}
