//! Hand-written scanner producing one [`Token`] per call.
//!
//! Each call to [`Scanner::next_token()`] first skips trivia (whitespace and
//! comments, in any interleaving), then classifies exactly one token and
//! advances past it. Malformed input never aborts the scan: a character that
//! starts no token becomes a one-character [`TokenKind::Illegal`] token and
//! scanning continues after it.
//!
//! # Design
//!
//! Trivia skipping is a loop rather than a recursive retry, so long runs of
//! consecutive comments cost no stack. The main dispatch matches on the first
//! byte of the token; identifier and number arms advance internally while
//! scanning, single-byte arms consume exactly the byte they classified.

use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords;
use crate::token::{Token, TokenKind};

/// Single-pass scanner over borrowed source text.
///
/// Not meant for sharing: one owner pulls tokens until it sees
/// [`TokenKind::Eof`], after which every call returns `Eof` again.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// 1-based line of the cursor. Only ever incremented.
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the first byte of `source`, line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            line: 1,
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current byte offset.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] with empty text once the source is
    /// exhausted. Subsequent calls continue to return `Eof` without moving.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_trivia();

        let start = self.cursor.pos();
        let line = self.line;
        let Some(byte) = self.cursor.current() else {
            return Token::new(TokenKind::Eof, "", line, start);
        };

        let kind = match byte {
            b'=' => self.single(TokenKind::Assign),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b',' => self.single(TokenKind::Comma),
            b'#' => self.single(TokenKind::Hash),
            b'<' => self.single_or_double(b'<', TokenKind::Less, TokenKind::Shl),
            b'>' => self.single_or_double(b'>', TokenKind::Greater, TokenKind::Shr),
            // `//` and `/*` were consumed as trivia; what remains is a lone slash.
            b'/' => self.single(TokenKind::Illegal),
            b if is_letter(b) => self.identifier(start),
            b if is_digit(b) => self.number(),
            _ => self.illegal(),
        };

        let tok = Token::new(kind, self.cursor.slice_from(start), line, start);
        trace!(kind = %tok.kind, text = tok.text, line = tok.line, "token");
        tok
    }

    /// Iterate over the remaining tokens, ending with (and including) `Eof`.
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    // ─── Trivia ────────────────────────────────────────────────────

    /// Skip whitespace and comments until a token start or end of input.
    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                Some(b'\n') => {
                    self.line = self.line.saturating_add(1);
                    self.cursor.advance();
                }
                Some(b) if is_whitespace(b) => self.cursor.advance(),
                Some(b'/') => match self.cursor.peek() {
                    Some(b'/') => self.cursor.eat_until_newline_or_eof(),
                    Some(b'*') => {
                        self.cursor.advance_n(2); // consume `/*`
                        let newlines = self.cursor.eat_block_comment_body();
                        self.line = self.line.saturating_add(newlines);
                    }
                    _ => return,
                },
                _ => return,
            }
        }
    }

    // ─── Tokens ────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and return the given kind.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// Maximal munch over a doubled byte: `<<` beats `<`, `>>` beats `>`.
    fn single_or_double(&mut self, byte: u8, single: TokenKind, double: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == Some(byte) {
            self.cursor.advance();
            double
        } else {
            single
        }
    }

    fn identifier(&mut self, start: u32) -> TokenKind {
        self.cursor.advance(); // first byte already classified
        self.cursor.eat_while(is_ident_continue);
        keywords::lookup(self.cursor.slice_from(start)).unwrap_or(TokenKind::Ident)
    }

    fn number(&mut self) -> TokenKind {
        self.cursor.eat_while(is_digit);
        TokenKind::IntLiteral
    }

    /// One illegal character. Non-ASCII characters are consumed whole so the
    /// token text stays valid UTF-8.
    fn illegal(&mut self) -> TokenKind {
        self.cursor.advance_char();
        TokenKind::Illegal
    }
}

/// Iterator over a scanner's tokens, yielding the final `Eof` once.
///
/// Created by [`Scanner::tokens()`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.done {
            return None;
        }
        let tok = self.scanner.next_token();
        self.done = tok.kind == TokenKind::Eof;
        Some(tok)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

// ─── Character classes ─────────────────────────────────────────────

/// ASCII letter or underscore: the bytes that may start an identifier.
#[inline]
pub const fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// ASCII decimal digit.
#[inline]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Space, tab, newline or carriage return. No other byte is whitespace.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    is_letter(b) || is_digit(b)
}

/// Convenience function: scan a source string and collect every token,
/// including the final `Eof`.
///
/// For streaming access, construct a [`Scanner`] directly.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Scanner::new(source).tokens().collect();
    tracing::debug!(
        tokens = tokens.len(),
        illegal = tokens.iter().filter(|t| t.kind.is_error()).count(),
        "lexed source"
    );
    tokens
}
