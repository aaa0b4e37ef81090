//! Scanner for the clex C subset.
//!
//! Converts source text into a finite sequence of classified tokens, each
//! tagged with the line it starts on. The token set covers three keywords
//! (`int`, `return`, `include`), identifiers, decimal integer literals,
//! `= + - << >> < >` and the punctuation `( ) { } ; , #`. Whitespace and
//! `//` / `/* */` comments are skipped; anything else is reported as an
//! [`Illegal`](TokenKind::Illegal) token and scanning carries on.
//!
//! # Usage
//!
//! ```
//! use clex_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("int x;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Int);
//! assert_eq!(scanner.next_token().text, "x");
//! assert_eq!(scanner.next_token().kind, TokenKind::Semicolon);
//! assert_eq!(scanner.next_token().kind, TokenKind::Eof);
//! ```
//!
//! This crate has no dependency on the CLI and can be used on its own.

mod cursor;
pub mod keywords;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use scanner::{is_digit, is_letter, is_whitespace, lex, Scanner, Tokens};
pub use token::{Token, TokenKind};
