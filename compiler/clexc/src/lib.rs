//! The clex command line.
//!
//! ```text
//! source file ──► read_source ──► clex_lexer::lex ──► TokenTable ──► stdout + output file
//! ```
//!
//! Scanning itself lives in `clex_lexer`; this crate only reads the input,
//! renders the token table and writes it out.

use std::sync::Once;

pub mod commands;
pub mod error;
pub mod options;
pub mod report;

pub use error::{CliError, CliResult};
pub use options::LexOptions;
pub use report::{LexSummary, TokenTable};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=clexc=debug` or `RUST_LOG=clex_lexer=trace`.
/// Logs go to stderr so they never mix with the token table on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
