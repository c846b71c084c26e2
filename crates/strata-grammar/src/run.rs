//! Tokens made of a run of characters from one class.

use strata_core::{Analysis, Cursor, Match, TokenDescriptor};

use crate::{Convert, builder, converter};

/// Character classes for [`RunDescriptor`].
#[derive(Debug, Clone, Copy)]
pub enum CharClass {
    /// `0`–`9`.
    Digit,
    /// Any alphabetic char.
    Letter,
    /// Letters and any numeric char.
    Alphanumeric,
    /// Alphanumerics and `_`.
    Identifier,
    Custom(fn(char) -> bool),
}

impl CharClass {
    pub fn contains(self, unit: char) -> bool {
        match self {
            Self::Digit => unit.is_ascii_digit(),
            Self::Letter => unit.is_alphabetic(),
            Self::Alphanumeric => unit.is_alphanumeric(),
            Self::Identifier => unit.is_alphanumeric() || unit == '_',
            Self::Custom(class) => class(unit),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Digit => "digits",
            Self::Letter => "letters",
            Self::Alphanumeric => "alphanumerics",
            Self::Identifier => "identifier",
            Self::Custom(_) => "run",
        }
    }
}

/// Matches the longest run of chars in a class.
///
/// With [`with_head`](Self::with_head), the first char comes from its own
/// class; identifiers that cannot start with a digit are
/// `RunDescriptor::new(CharClass::Identifier, ..).with_head(CharClass::Letter)`.
pub struct RunDescriptor<T> {
    label: String,
    head: CharClass,
    tail: CharClass,
    build: Convert<T>,
}

impl<T> RunDescriptor<T> {
    pub fn new(class: CharClass, build: impl Fn(&str) -> T + Send + Sync + 'static) -> Self {
        Self::with_converter(class, builder(build))
    }

    /// Conversion that can fail; see [`PatternDescriptor::fallible`](crate::PatternDescriptor::fallible).
    pub fn fallible<E: std::fmt::Display>(
        class: CharClass,
        convert: impl Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    ) -> Self {
        Self::with_converter(class, converter(convert))
    }

    fn with_converter(class: CharClass, build: Convert<T>) -> Self {
        Self {
            label: class.label().to_string(),
            head: class,
            tail: class,
            build,
        }
    }

    pub fn with_head(mut self, head: CharClass) -> Self {
        self.head = head;
        self
    }

    /// Name reported in traces.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<T> TokenDescriptor<T> for RunDescriptor<T> {
    fn first(&self, cursor: Cursor<'_>) -> Match<T> {
        let rest = cursor.remainder();
        let Some(head) = rest.chars().next().filter(|&c| self.head.contains(c)) else {
            return Ok(None);
        };

        let start = head.len_utf8();
        let len = rest[start..]
            .char_indices()
            .find(|&(_, c)| !self.tail.contains(c))
            .map_or(rest.len(), |(at, _)| start + at);

        let token = (self.build)(&rest[..len], cursor.offset())?;
        Ok(Some(Analysis::new(token, len)))
    }

    fn name(&self) -> &str {
        &self.label
    }
}

impl<T> std::fmt::Debug for RunDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunDescriptor")
            .field("label", &self.label)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish_non_exhaustive()
    }
}
