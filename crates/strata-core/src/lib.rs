#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core engine for Strata: descriptor-driven lexical and syntactic analysis.
//!
//! Two stages, both driven by ordered lists of client-supplied descriptors:
//! - **Tokenizer**: `&str` → `Vec<T>`, one [`TokenDescriptor`] match per token
//! - **Parser**: `&[T]` → `Vec<N>`, one [`NodeDescriptor`] match per node
//!
//! Dispatch is ordered choice: descriptors are tried in list order and the
//! first match wins. Every match consumes at least one unit (a byte-measured
//! char run for tokens, a token run for nodes), which is what guarantees both
//! loops terminate. Any failure aborts the whole call.
//!
//! The core never looks inside tokens or nodes. Grammars define their own
//! closed enums; nodes only need to know how to wrap a sequence of themselves
//! (see [`Node`]).

pub mod collection;
pub mod colors;
pub mod config;
pub mod cursor;
pub mod decode;
pub mod parser;
pub mod slice;
pub mod tokenizer;
pub mod trace;

mod analysis;
mod descriptor;
mod invariants;

#[cfg(test)]
mod descriptor_tests;
#[cfg(test)]
mod test_utils;

pub use analysis::{Analysis, Match};
pub use collection::CollectionDescriptor;
pub use colors::Colors;
pub use config::{Config, DEFAULT_RECURSION_LIMIT, IgnoredChars};
pub use cursor::Cursor;
pub use decode::{Encoding, decode};
pub use descriptor::{
    Branch, DescriptorList, Node, NodeDescriptor, NodeDescriptors, TokenDescriptor,
    TokenDescriptors,
};
pub use parser::Parser;
pub use slice::TokenSlice;
pub use tokenizer::Tokenizer;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Errors that abort a tokenize or parse call.
///
/// Positions are byte offsets into the analysed text for the lexical stage
/// and absolute token indices for the syntactic stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Nothing to analyse.
    #[error("input is empty")]
    EmptyInput,

    /// Raw bytes are not valid under the declared encoding.
    #[error("input is not valid {encoding} (first bad byte at offset {offset})")]
    DecodeFailure { encoding: Encoding, offset: usize },

    /// No token descriptor matched.
    #[error("invalid character {unit:?} at offset {offset}")]
    InvalidCharacter { offset: usize, unit: char },

    /// A multi-unit token was started but its terminator never showed up.
    #[error("unterminated literal starting at offset {offset}")]
    UnterminatedLiteral { offset: usize },

    /// The whole input was ignorable.
    #[error("input contains no tokens")]
    NoTokensProduced,

    /// No node descriptor matched.
    #[error("invalid token {token} at index {index}")]
    InvalidToken { index: usize, token: String },

    /// A collection separator with no element after it.
    #[error("unterminated collection: separator at index {index} is not followed by an element")]
    UnterminatedCollection { index: usize },

    /// The token sequence reduced to nothing.
    #[error("token sequence contains no nodes")]
    NoNodesProduced,

    /// Captured text matched lexically but could not be converted.
    #[error("cannot convert {text:?} at {position}: {reason}")]
    ValueConversion {
        position: usize,
        text: String,
        reason: String,
    },

    /// Branch analysis nested deeper than the configured limit.
    #[error("recursion limit exceeded at token index {index}")]
    RecursionLimitExceeded { index: usize },
}

impl Error {
    /// Shorthand for [`Error::ValueConversion`].
    pub fn conversion(
        position: usize,
        text: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::ValueConversion {
            position,
            text: text.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
