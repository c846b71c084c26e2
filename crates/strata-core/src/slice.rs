//! Window into a token sequence that remembers where it sits.

use std::ops::{Deref, Range};

/// A contiguous run `[start, end)` of the token sequence handed to the parser.
///
/// Derefs to the windowed tokens, so descriptors index it relatively
/// (`slice[0]` is the first remaining token), while [`start`](Self::start)
/// and [`absolute`](Self::absolute) recover positions in the full sequence
/// for error reporting.
#[derive(Debug)]
pub struct TokenSlice<'t, T> {
    base: &'t [T],
    start: usize,
    end: usize,
}

impl<T> Clone for TokenSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TokenSlice<'_, T> {}

impl<'t, T> TokenSlice<'t, T> {
    /// Window over the whole sequence.
    pub fn new(base: &'t [T]) -> Self {
        Self {
            base,
            start: 0,
            end: base.len(),
        }
    }

    /// Absolute index of the first token in the window.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute index one past the last token in the window.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The full sequence this window belongs to.
    #[inline]
    pub fn base(&self) -> &'t [T] {
        self.base
    }

    #[inline]
    pub fn as_slice(&self) -> &'t [T] {
        &self.base[self.start..self.end]
    }

    /// Translate a window-relative index into an absolute one.
    #[inline]
    pub fn absolute(&self, relative: usize) -> usize {
        self.start + relative
    }

    /// Sub-window from a window-relative range.
    ///
    /// Panics if the range does not fit inside this window.
    pub fn slice(&self, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= self.len(),
            "token range {range:?} out of bounds for a window of {} tokens",
            self.len()
        );
        Self {
            base: self.base,
            start: self.start + range.start,
            end: self.start + range.end,
        }
    }

    /// Sub-window without its first `count` tokens.
    pub fn skip(&self, count: usize) -> Self {
        self.slice(count.min(self.len())..self.len())
    }

    /// True when `other` is a window of the same sequence that lies inside
    /// this one.
    pub fn contains(&self, other: &TokenSlice<'_, T>) -> bool {
        std::ptr::eq(self.base, other.base) && self.start <= other.start && other.end <= self.end
    }
}

impl<T> Deref for TokenSlice<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
