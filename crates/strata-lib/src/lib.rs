//! Strata: descriptor-driven tokenizing and parsing for small ad hoc grammars.
//!
//! A grammar is two ordered lists of descriptors. The [`Tokenizer`] turns text
//! into tokens with the first list; the [`Parser`] turns tokens into nodes
//! with the second. In both lists the first descriptor that matches wins.
//! Stock descriptors live in [`grammar`].
//!
//! # Example
//!
//! ```
//! use strata_lib::grammar::{CharClass, CharDescriptor, LeafDescriptor, RunDescriptor};
//! use strata_lib::{CollectionDescriptor, Node, NodeDescriptors, Parser, TokenDescriptors, Tokenizer};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Token {
//!     Comma,
//!     Number(u64),
//! }
//!
//! #[derive(Debug, PartialEq)]
//! enum Value {
//!     Number(u64),
//!     List(Vec<Value>),
//! }
//!
//! impl Node for Value {
//!     fn collection(nodes: Vec<Self>) -> Self {
//!         Value::List(nodes)
//!     }
//! }
//!
//! let tokenizer = Tokenizer::new(
//!     TokenDescriptors::new()
//!         .with(CharDescriptor::new([(',', Token::Comma)]))
//!         .with(RunDescriptor::fallible(CharClass::Digit, |text: &str| {
//!             text.parse().map(Token::Number)
//!         })),
//! );
//!
//! let numbers = LeafDescriptor::new(|token: &Token, _: usize| {
//!     Ok(match token {
//!         Token::Number(n) => Some(Value::Number(*n)),
//!         Token::Comma => None,
//!     })
//! });
//! let parser = Parser::new(
//!     NodeDescriptors::new()
//!         .with(CollectionDescriptor::separated_by(Token::Comma))
//!         .with(numbers),
//! );
//!
//! let tokens = tokenizer.analyse("1, 2, 3")?;
//! assert_eq!(
//!     parser.analyse_tree(&tokens)?,
//!     Value::List(vec![Value::Number(1), Value::Number(2), Value::Number(3)])
//! );
//! # Ok::<(), strata_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use strata_core::*;

/// Stock token and node descriptors.
pub mod grammar {
    pub use strata_grammar::*;
}

#[cfg(test)]
mod test_grammar;
