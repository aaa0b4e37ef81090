//! The `lex` command: scan a file and write its token table.

use std::io::Write;

use tracing::debug;

use super::{read_source, write_output};
use crate::error::CliResult;
use crate::options::LexOptions;
use crate::report::{LexSummary, TokenTable};

/// Scan `options.input`, write the table to `options.output`, then echo it
/// to `out` unless quiet.
///
/// Nothing is echoed if the output file cannot be written.
pub fn lex_file(options: &LexOptions, out: &mut impl Write) -> CliResult<LexSummary> {
    debug!(input = %options.input.display(), output = %options.output.display(), "lex");

    let source = read_source(&options.input)?;
    let tokens = clex_lexer::lex(&source);
    let table = TokenTable::new(&tokens).to_string();

    write_output(&options.output, &table)?;
    if options.echo {
        out.write_all(table.as_bytes())?;
    }

    let summary = LexSummary::from_tokens(&tokens);
    debug!(
        tokens = summary.tokens,
        illegal = summary.illegal,
        lines = summary.lines,
        "token table written"
    );

    writeln!(
        out,
        "Lexical analysis completed. Results have been saved to {}.",
        options.output.display()
    )?;
    Ok(summary)
}
