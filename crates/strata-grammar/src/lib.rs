//! Stock descriptors for Strata grammars.
//!
//! Everything here is built on the public `strata-core` traits only; a
//! grammar is free to mix these with its own descriptors.
//! - `chars` - single-character tokens from a lookup table
//! - `keyword` - fixed words
//! - `pattern` - regular expressions, compiled once to an anchored DFA
//! - `run` - longest runs of a character class
//! - `quoted` - delimited literals such as `"strings"`
//! - `leaf` - one-token nodes

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod chars;
pub mod keyword;
pub mod leaf;
pub mod pattern;
pub mod quoted;
pub mod run;

#[cfg(test)]
mod keyword_tests;
#[cfg(test)]
mod run_tests;

pub use chars::CharDescriptor;
pub use keyword::KeywordDescriptor;
pub use leaf::LeafDescriptor;
pub use pattern::PatternDescriptor;
pub use quoted::QuotedDescriptor;
pub use run::{CharClass, RunDescriptor};

/// Errors raised while building a descriptor, before any analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// A keyword must contain at least one character.
    #[error("keyword must not be empty")]
    EmptyKeyword,

    /// The regular expression did not compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The regular expression accepts the empty string, so it could match
    /// without consuming input.
    #[error("pattern {pattern:?} can match the empty string")]
    EmptyMatch { pattern: String },

    /// The escape character of a quoted literal cannot double as a delimiter.
    #[error("quoted literal delimiter {delimiter:?} cannot also be the escape character")]
    DelimiterIsEscape { delimiter: char },
}

/// Result type for descriptor construction.
pub type Result<T> = std::result::Result<T, GrammarError>;

/// Turns matched text at a byte offset into a token.
pub(crate) type Convert<T> = Box<dyn Fn(&str, usize) -> strata_core::Result<T> + Send + Sync>;

/// Wraps a fallible conversion; failures become [`strata_core::Error::ValueConversion`].
pub(crate) fn converter<T, E: std::fmt::Display>(
    convert: impl Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
) -> Convert<T> {
    Box::new(move |text: &str, offset: usize| {
        convert(text).map_err(|err| strata_core::Error::conversion(offset, text, err))
    })
}

/// Wraps an infallible conversion.
pub(crate) fn builder<T>(build: impl Fn(&str) -> T + Send + Sync + 'static) -> Convert<T> {
    Box::new(move |text: &str, _: usize| Ok(build(text)))
}
