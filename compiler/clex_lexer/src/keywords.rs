//! Reserved keyword resolution.
//!
//! The table is fixed and case-sensitive: `int`, `return` and `include`.
//! Everything else that scans as an identifier stays an identifier,
//! including names like `main` or `cout`.

use crate::TokenKind;

/// Spellings of every reserved keyword.
pub const KEYWORDS: [&str; 3] = ["int", "return", "include"];

/// Look up a reserved keyword by text.
///
/// Returns the corresponding `TokenKind` if the text is a reserved keyword,
/// `None` if it's a regular identifier. Matching is exact: `Int` and `INT`
/// are identifiers.
///
/// Uses length-bucketing for fast rejection: identifiers whose length falls
/// outside the 3-7 range are rejected without any string comparison.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        3 => match text {
            "int" => Some(TokenKind::Int),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        7 => match text {
            "include" => Some(TokenKind::Include),
            _ => None,
        },
        _ => None,
    }
}
