//! Delimited literals.

use strata_core::{Analysis, Cursor, Error, Match, TokenDescriptor};

use crate::{Convert, GrammarError, Result, builder, converter};

/// Matches `open … close`, delimiters included in the token text.
///
/// An opening delimiter without its closing one is an
/// [`Error::UnterminatedLiteral`] at the opening offset, not a non-match:
/// the literal has clearly started, and no other descriptor should get a go
/// at the rest of it. With an escape char set, the char after it never
/// closes the literal.
pub struct QuotedDescriptor<T> {
    label: String,
    open: char,
    close: char,
    escape: Option<char>,
    build: Convert<T>,
}

impl<T> QuotedDescriptor<T> {
    pub fn new(open: char, close: char, build: impl Fn(&str) -> T + Send + Sync + 'static) -> Self {
        Self::with_converter(open, close, builder(build))
    }

    /// `"…"` literals.
    pub fn double_quoted(build: impl Fn(&str) -> T + Send + Sync + 'static) -> Self {
        Self::new('"', '"', build).labelled("string")
    }

    pub fn fallible<E: std::fmt::Display>(
        open: char,
        close: char,
        convert: impl Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
    ) -> Self {
        Self::with_converter(open, close, converter(convert))
    }

    fn with_converter(open: char, close: char, build: Convert<T>) -> Self {
        Self {
            label: "quoted".to_string(),
            open,
            close,
            escape: None,
            build,
        }
    }

    pub fn with_escape(mut self, escape: char) -> Result<Self> {
        if escape == self.open || escape == self.close {
            return Err(GrammarError::DelimiterIsEscape { delimiter: escape });
        }
        self.escape = Some(escape);
        Ok(self)
    }

    /// Name reported in traces.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Byte length of the literal at the start of `rest`, closing delimiter
    /// included, or `None` when it never closes.
    fn literal_len(&self, rest: &str) -> Option<usize> {
        let body = self.open.len_utf8();
        let mut chars = rest[body..].char_indices();
        while let Some((at, c)) = chars.next() {
            if Some(c) == self.escape {
                chars.next();
            } else if c == self.close {
                return Some(body + at + c.len_utf8());
            }
        }
        None
    }
}

impl<T> TokenDescriptor<T> for QuotedDescriptor<T> {
    fn first(&self, cursor: Cursor<'_>) -> Match<T> {
        if cursor.first() != Some(self.open) {
            return Ok(None);
        }

        let rest = cursor.remainder();
        let Some(len) = self.literal_len(rest) else {
            return Err(Error::UnterminatedLiteral {
                offset: cursor.offset(),
            });
        };

        let token = (self.build)(&rest[..len], cursor.offset())?;
        Ok(Some(Analysis::new(token, len)))
    }

    fn name(&self) -> &str {
        &self.label
    }
}

impl<T> std::fmt::Debug for QuotedDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuotedDescriptor")
            .field("label", &self.label)
            .field("open", &self.open)
            .field("close", &self.close)
            .field("escape", &self.escape)
            .finish_non_exhaustive()
    }
}
