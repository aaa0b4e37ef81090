//! Bounds-checked byte cursor over borrowed source text.
//!
//! The cursor advances through the source byte-by-byte. End of input is an
//! explicit boundary (`pos >= source_len`), reported as `None` from
//! [`Cursor::current()`] and [`Cursor::peek()`]. No byte value is reserved as
//! a terminator, so a NUL inside the source is an ordinary byte.

/// Byte cursor over a source string.
///
/// The cursor is [`Copy`], so the scanner can snapshot it cheaply.
///
/// # Invariant
///
/// `pos <= source_len` at all times. Every advancing method clamps to
/// `source_len`, so the cursor can never be pushed past the end.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes (valid UTF-8, borrowed from a `&str`).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the source in bytes.
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Source Size
    ///
    /// Positions are `u32`. Sources longer than `u32::MAX` bytes are
    /// truncated to the first `u32::MAX` bytes (rounded down to a character
    /// boundary) rather than overflowing. Callers that read files detect
    /// and report oversized input before scanning.
    pub fn new(source: &'a str) -> Self {
        let mut len = source.len().min(u32::MAX as usize);
        while !source.is_char_boundary(len) {
            len -= 1;
        }
        let source_len = u32::try_from(len).unwrap_or(u32::MAX);
        Self {
            buf: &source.as_bytes()[..len],
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos as usize).copied()
    }

    /// Returns the byte one position ahead of current, or `None` if that
    /// position is past the end of input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos as usize + 1).copied()
    }

    /// Advance the cursor by one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance the cursor by `n` bytes, stopping at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `""` if `start..end` is out of range or does not fall on
    /// character boundaries. Token boundaries produced by the scanner always
    /// satisfy both, so the fallback is never taken for scanner output.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.buf
            .get(start as usize..end as usize)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at end of input regardless of the predicate.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// No-op at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(b) = self.current() {
            self.advance_n(Self::utf8_char_width(b));
        }
    }

    /// Advance to the next `\n` byte, or to end of input if there is none.
    ///
    /// The newline itself is not consumed. Used by the scanner to skip the
    /// body of a `//` comment.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Skip the body of a block comment whose opening `/*` was already
    /// consumed.
    ///
    /// Advances past the first `*/` at or after the current position. If the
    /// comment is unterminated, advances to end of input. Returns the number
    /// of `\n` bytes skipped so the caller can keep its line count in step.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets and counts are bounded by source_len which fits in u32"
    )]
    pub fn eat_block_comment_body(&mut self) -> u32 {
        let remaining = &self.buf[self.pos as usize..];
        let body_len = memchr::memmem::find(remaining, b"*/").unwrap_or(remaining.len());
        let newlines = memchr::memchr_iter(b'\n', &remaining[..body_len]).count() as u32;
        // Closing `*/` is clamped away when absent.
        self.advance_n((body_len as u32).saturating_add(2));
        newlines
    }
}
