//! Lexical analysis: text to an ordered token sequence.

use crate::analysis::Match;
use crate::config::{Config, IgnoredChars};
use crate::cursor::Cursor;
use crate::decode::{Encoding, decode};
use crate::descriptor::TokenDescriptors;
use crate::trace::{NoopTracer, Tracer};
use crate::{Error, Result};

/// Turns text into tokens by ordered-choice dispatch over token descriptors.
///
/// Immutable once built: one tokenizer can serve any number of `analyse`
/// calls, from several threads at once.
#[derive(Debug)]
pub struct Tokenizer<T> {
    descriptors: TokenDescriptors<T>,
    config: Config,
}

impl<T> Tokenizer<T> {
    pub fn new(descriptors: TokenDescriptors<T>) -> Self {
        Self {
            descriptors,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_ignored(mut self, ignored: IgnoredChars) -> Self {
        self.config.ignored = ignored;
        self
    }

    pub fn descriptors(&self) -> &TokenDescriptors<T> {
        &self.descriptors
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenize `input`. Tokens come back in left-to-right order.
    pub fn analyse(&self, input: &str) -> Result<Vec<T>> {
        self.analyse_traced(input, &mut NoopTracer)
    }

    /// Decode `data` as `encoding`, then tokenize it.
    pub fn analyse_bytes(&self, data: &[u8], encoding: Encoding) -> Result<Vec<T>> {
        let text = decode(data, encoding)?;
        self.analyse(&text)
    }

    /// [`analyse`](Self::analyse), reporting every step to `tracer`.
    pub fn analyse_traced<Tr: Tracer>(&self, input: &str, tracer: &mut Tr) -> Result<Vec<T>> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut tokens = Vec::new();
        let mut cursor = Cursor::start(input);

        while let Some(unit) = cursor.first() {
            let offset = cursor.offset();

            if self.config.ignored.contains(unit) {
                tracer.trace_skip(offset, unit);
                cursor = cursor.advanced(unit.len_utf8());
                continue;
            }

            let Some(analysis) = self.first_token(cursor, tracer)? else {
                return Err(Error::InvalidCharacter { offset, unit });
            };

            cursor = cursor.advanced(analysis.consumed);
            tokens.push(analysis.value);
        }

        if tokens.is_empty() {
            return Err(Error::NoTokensProduced);
        }

        Ok(tokens)
    }

    /// First descriptor in list order that matches at `cursor`.
    fn first_token<Tr: Tracer>(&self, cursor: Cursor<'_>, tracer: &mut Tr) -> Match<T> {
        for descriptor in self.descriptors.iter() {
            match descriptor.first(cursor)? {
                Some(analysis) => {
                    cursor.ensure_token_consumed(analysis.consumed, descriptor.name());
                    tracer.trace_token_match(cursor.offset(), descriptor.name(), analysis.consumed);
                    return Ok(Some(analysis));
                }
                None => tracer.trace_token_miss(cursor.offset(), descriptor.name()),
            }
        }
        Ok(None)
    }
}
