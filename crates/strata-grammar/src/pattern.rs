//! Regular-expression tokens.
//!
//! Patterns are compiled once, at construction, into a dense DFA that only
//! supports anchored searches. Each match attempt then runs the DFA from the
//! cursor position: the end of the leftmost-first match is the consumed
//! length. The search sees the whole input, so `^`, `$` and `\b` are judged
//! against the surrounding text rather than the remainder alone.

use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::{Anchored, Input};
use strata_core::{Analysis, Cursor, Match, TokenDescriptor};

use crate::{Convert, GrammarError, Result, builder, converter};

/// Matches a regular expression at the cursor.
pub struct PatternDescriptor<T> {
    pattern: String,
    label: String,
    dfa: dense::DFA<Vec<u32>>,
    build: Convert<T>,
}

impl<T> PatternDescriptor<T> {
    /// `build` receives the matched text.
    pub fn new(pattern: &str, build: impl Fn(&str) -> T + Send + Sync + 'static) -> Result<Self> {
        Self::with_converter(pattern, builder(build))
    }

    /// Like [`new`](Self::new), for conversions that can fail (numbers that
    /// overflow, dates out of range). A failure aborts the analysis with
    /// `ValueConversion` at the match offset.
    pub fn fallible<E: std::fmt::Display>(
        pattern: &str,
        convert: impl Fn(&str) -> std::result::Result<T, E> + Send + Sync + 'static,
    ) -> Result<Self> {
        Self::with_converter(pattern, converter(convert))
    }

    fn with_converter(pattern: &str, build: Convert<T>) -> Result<Self> {
        Ok(Self {
            pattern: pattern.to_string(),
            label: pattern.to_string(),
            dfa: compile(pattern)?,
            build,
        })
    }

    /// Name reported in traces. Defaults to the pattern itself.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

fn compile(pattern: &str) -> Result<dense::DFA<Vec<u32>>> {
    let invalid = |reason: String| GrammarError::InvalidPattern {
        pattern: pattern.to_string(),
        reason,
    };

    let hir = regex_syntax::parse(pattern).map_err(|e| invalid(e.to_string()))?;
    if hir.properties().minimum_len() == Some(0) {
        return Err(GrammarError::EmptyMatch {
            pattern: pattern.to_string(),
        });
    }

    dense::DFA::builder()
        .configure(dense::DFA::config().start_kind(StartKind::Anchored))
        .build(pattern)
        .map_err(|e| invalid(e.to_string()))
}

impl<T> TokenDescriptor<T> for PatternDescriptor<T> {
    fn first(&self, cursor: Cursor<'_>) -> Match<T> {
        let input = Input::new(cursor.base())
            .range(cursor.offset()..)
            .anchored(Anchored::Yes);

        // Anchored starts are compiled in and Unicode word boundaries are
        // rejected at build time, so the DFA never gives up mid-search.
        let found = self
            .dfa
            .try_search_fwd(&input)
            .expect("anchored DFA search failed");

        let Some(end) = found.map(|half| half.offset()) else {
            return Ok(None);
        };
        let consumed = end - cursor.offset();
        if consumed == 0 {
            return Ok(None);
        }

        let text = &cursor.remainder()[..consumed];
        let token = (self.build)(text, cursor.offset())?;
        Ok(Some(Analysis::new(token, consumed)))
    }

    fn name(&self) -> &str {
        &self.label
    }
}

impl<T> std::fmt::Debug for PatternDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternDescriptor")
            .field("pattern", &self.pattern)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
