//! Zero-copy view of the text that remains to be tokenized.

/// A position inside the text being tokenized.
///
/// The cursor never copies: [`remainder`](Self::remainder) is a slice of the
/// base text, recomputed from the offset on every call. Offsets are byte
/// offsets and always sit on a char boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    base: &'src str,
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Panics if `offset` is past the end or splits a character.
    pub fn new(base: &'src str, offset: usize) -> Self {
        assert!(
            base.is_char_boundary(offset),
            "cursor offset {offset} is not a char boundary of a {}-byte input",
            base.len()
        );
        Self { base, offset }
    }

    /// Cursor at the start of `base`.
    pub fn start(base: &'src str) -> Self {
        Self { base, offset: 0 }
    }

    /// The full text, including what was already consumed.
    #[inline]
    pub fn base(&self) -> &'src str {
        self.base
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unconsumed text. Empty at the end of input.
    #[inline]
    pub fn remainder(&self) -> &'src str {
        &self.base[self.offset..]
    }

    /// First unconsumed character.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Character right before the cursor, if any.
    pub fn preceding(&self) -> Option<char> {
        self.base[..self.offset].chars().next_back()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset == self.base.len()
    }

    /// True at offset 0 and right after a `\n`.
    pub fn is_line_start(&self) -> bool {
        matches!(self.preceding(), None | Some('\n'))
    }

    /// Cursor moved forward by `consumed` bytes.
    pub fn advanced(&self, consumed: usize) -> Self {
        Self::new(self.base, self.offset + consumed)
    }
}
