//! Separator-delimited collections: `E0 SEP E1 SEP … SEP En`.
//!
//! The reference composite descriptor. Each element span runs up to the next
//! separator (or the end of the slice) and is reduced through the branch
//! callback, so an element may itself be several tokens long.
//!
//! With [`nested`](CollectionDescriptor::nested), separators between an
//! opening and its closing token belong to an inner element and are skipped,
//! so only top-level separators split the collection.
//!
//! A collection needs at least two tokens: a one-token element followed by a
//! top-level separator. That pair is enough to commit; from then on, a
//! separator without an element after it is a hard error rather than a
//! non-match. It always consumes the whole slice it is given, so it
//! belongs at whole-expression boundaries, ahead of descriptors that would
//! otherwise claim the first element on its own.

use crate::Error;
use crate::analysis::{Analysis, Match};
use crate::descriptor::{Branch, Node, NodeDescriptor};
use crate::slice::TokenSlice;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Node descriptor producing [`Node::collection`] of separator-delimited elements.
pub struct CollectionDescriptor<T> {
    is_separator: Predicate<T>,
    nesting: Option<(Predicate<T>, Predicate<T>)>,
}

impl<T> CollectionDescriptor<T> {
    pub fn new(is_separator: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            is_separator: Box::new(is_separator),
            nesting: None,
        }
    }

    /// Ignore separators inside `opens`…`closes` pairs when splitting elements.
    pub fn nested(
        mut self,
        opens: impl Fn(&T) -> bool + Send + Sync + 'static,
        closes: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.nesting = Some((Box::new(opens), Box::new(closes)));
        self
    }

    /// Separator is any token equal to `separator`.
    pub fn separated_by(separator: T) -> Self
    where
        T: PartialEq + Send + Sync + 'static,
    {
        Self::new(move |token| *token == separator)
    }

    fn is_separator(&self, token: &T) -> bool {
        (self.is_separator)(token)
    }

    /// Index of the first top-level separator at or after `from`.
    fn next_separator(&self, tokens: &[T], from: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (at, token) in tokens.iter().enumerate().skip(from) {
            if let Some((opens, closes)) = &self.nesting {
                if opens(token) {
                    depth += 1;
                    continue;
                }
                if closes(token) {
                    depth = depth.saturating_sub(1);
                    continue;
                }
            }
            if depth == 0 && self.is_separator(token) {
                return Some(at);
            }
        }
        None
    }
}

impl<T, N: Node> NodeDescriptor<T, N> for CollectionDescriptor<T> {
    fn first<'t>(
        &self,
        tokens: TokenSlice<'t, T>,
        branch: &mut Branch<'_, 't, T, N>,
    ) -> Match<N> {
        // A collection opens with a one-token element followed by a top-level
        // separator. An opening head pushes its separators out of the top level.
        if self.next_separator(&tokens, 0) != Some(1) {
            return Ok(None);
        }

        let mut elements = Vec::new();
        let mut start = 0;
        loop {
            match self.next_separator(&tokens, start) {
                // Two separators in a row: the first one has no element after it.
                Some(separator) if separator == start => {
                    return Err(Error::UnterminatedCollection {
                        index: tokens.absolute(start - 1),
                    });
                }
                Some(separator) => {
                    elements.push(branch(tokens.slice(start..separator))?.value);
                    if separator + 1 == tokens.len() {
                        return Err(Error::UnterminatedCollection {
                            index: tokens.absolute(separator),
                        });
                    }
                    start = separator + 1;
                }
                None => {
                    elements.push(branch(tokens.slice(start..tokens.len()))?.value);
                    break;
                }
            }
        }

        Ok(Some(Analysis::new(N::collection(elements), tokens.len())))
    }

    fn name(&self) -> &str {
        "collection"
    }
}
