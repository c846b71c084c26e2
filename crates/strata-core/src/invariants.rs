//! Invariant checks excluded from coverage reports.
//!
//! A failure here means a descriptor broke its contract, not that the input
//! was bad, so these panic instead of returning an [`Error`](crate::Error).

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::cursor::Cursor;
use crate::slice::TokenSlice;

impl Cursor<'_> {
    #[inline]
    pub(crate) fn ensure_token_consumed(&self, consumed: usize, descriptor: &str) {
        let offset = self.offset();
        let remaining = self.remainder().len();
        assert!(
            consumed >= 1,
            "broken descriptor contract: `{descriptor}` matched at offset {offset} without consuming input"
        );
        assert!(
            consumed <= remaining,
            "broken descriptor contract: `{descriptor}` claimed {consumed} bytes at offset {offset} \
             but only {remaining} remain"
        );
        assert!(
            self.remainder().is_char_boundary(consumed),
            "broken descriptor contract: `{descriptor}` match at offset {offset} ends inside a character"
        );
    }
}

impl<T> TokenSlice<'_, T> {
    #[inline]
    pub(crate) fn ensure_node_consumed(&self, consumed: usize, descriptor: &str) {
        let index = self.start();
        let remaining = self.len();
        assert!(
            consumed >= 1,
            "broken descriptor contract: `{descriptor}` matched at index {index} without consuming tokens"
        );
        assert!(
            consumed <= remaining,
            "broken descriptor contract: `{descriptor}` claimed {consumed} tokens at index {index} \
             but only {remaining} remain"
        );
    }

    #[inline]
    pub(crate) fn ensure_branch(&self, sub: &TokenSlice<'_, T>) {
        assert!(
            self.contains(sub) && sub.len() < self.len(),
            "broken descriptor contract: branch {}..{} is not strictly inside {}..{}",
            sub.start(),
            sub.end(),
            self.start(),
            self.end()
        );
    }
}
