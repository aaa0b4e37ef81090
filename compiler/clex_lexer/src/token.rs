//! Token vocabulary: [`TokenKind`] tags and the [`Token`] value.
//!
//! Discriminants are grouped into semantic ranges so a kind fits in one byte
//! and related kinds sort together:
//!
//! | Range   | Group                         |
//! |---------|-------------------------------|
//! | 0-15    | Keywords                      |
//! | 16-31   | Identifiers & literals        |
//! | 32-63   | Operators                     |
//! | 80-95   | Delimiters & punctuation      |
//! | 240-254 | Errors                        |
//! | 255     | End of input                  |

use std::fmt;

/// Classification of a lexical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Keywords ===
    /// `int`
    Int = 0,
    /// `return`
    Return = 1,
    /// `include`
    Include = 2,

    // === Identifiers & Literals ===
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword.
    Ident = 16,
    /// `[0-9]+`
    IntLiteral = 17,

    // === Operators ===
    /// `=`
    Assign = 32,
    /// `+`
    Plus = 33,
    /// `-`
    Minus = 34,
    /// `<<`
    Shl = 35,
    /// `>>`
    Shr = 36,
    /// `<`
    Less = 37,
    /// `>`
    Greater = 38,

    // === Delimiters & Punctuation ===
    /// `(`
    LeftParen = 80,
    /// `)`
    RightParen = 81,
    /// `{`
    LeftBrace = 82,
    /// `}`
    RightBrace = 83,
    /// `;`
    Semicolon = 84,
    /// `,`
    Comma = 85,
    /// `#`
    Hash = 86,

    // === Errors ===
    /// A single character that starts no valid token.
    Illegal = 240,

    // === Control ===
    /// End of input. Text is always empty.
    Eof = 255,
}

impl TokenKind {
    /// Upper-case name used in token tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Return => "RETURN",
            Self::Include => "INCLUDE",
            Self::Ident => "IDENTIFIER",
            Self::IntLiteral => "INTEGER_LIT",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Shl => "LSHIFT",
            Self::Shr => "RSHIFT",
            Self::Less => "LESS",
            Self::Greater => "GREATER",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::LeftBrace => "LBRACE",
            Self::RightBrace => "RBRACE",
            Self::Semicolon => "SEMICOLON",
            Self::Comma => "COMMA",
            Self::Hash => "HASH",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        }
    }

    /// Fixed source text for kinds that always have the same spelling.
    ///
    /// Returns `None` for kinds whose text varies (`Ident`, `IntLiteral`,
    /// `Illegal`) and for `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Int => Some("int"),
            Self::Return => Some("return"),
            Self::Include => Some("include"),
            Self::Assign => Some("="),
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Shl => Some("<<"),
            Self::Shr => Some(">>"),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::Semicolon => Some(";"),
            Self::Comma => Some(","),
            Self::Hash => Some("#"),
            Self::Ident | Self::IntLiteral | Self::Illegal | Self::Eof => None,
        }
    }

    /// Returns `true` for reserved keywords.
    pub const fn is_keyword(self) -> bool {
        (self as u8) < 16
    }

    /// Returns `true` for error kinds.
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Illegal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags in report formatting apply.
        f.pad(self.name())
    }
}

/// One classified lexical unit.
///
/// `text` borrows from the scanned source, so a token cannot outlive it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Classification of the token.
    pub kind: TokenKind,
    /// Exact source text of the token. Empty for [`TokenKind::Eof`].
    pub text: &'src str,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// Byte offset of the token's first character.
    pub offset: u32,
}

impl<'src> Token<'src> {
    pub const fn new(kind: TokenKind, text: &'src str, line: u32, offset: u32) -> Self {
        Self {
            kind,
            text,
            line,
            offset,
        }
    }

    /// Byte length of the token's text.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text is a slice of a source whose length fits in u32"
    )]
    pub const fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Returns `true` only for the end-of-input token.
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the token's last character.
    pub const fn end(&self) -> u32 {
        self.offset + self.len()
    }
}
