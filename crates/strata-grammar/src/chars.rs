//! Single-character tokens.

use strata_core::{Analysis, Cursor, Match, TokenDescriptor};

/// Matches one char from a fixed table and yields the token paired with it.
///
/// Useful for punctuation: `(`, `)`, `,` and friends in one descriptor.
#[derive(Debug, Clone)]
pub struct CharDescriptor<T> {
    label: String,
    table: Vec<(char, T)>,
}

impl<T: Clone> CharDescriptor<T> {
    pub fn new(table: impl IntoIterator<Item = (char, T)>) -> Self {
        Self {
            label: "char".to_string(),
            table: table.into_iter().collect(),
        }
    }

    /// Name reported in traces.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Token for `unit`, if the table knows it.
    pub fn lookup(&self, unit: char) -> Option<&T> {
        self.table
            .iter()
            .find(|(c, _)| *c == unit)
            .map(|(_, token)| token)
    }
}

impl<T: Clone + Send + Sync> TokenDescriptor<T> for CharDescriptor<T> {
    fn first(&self, cursor: Cursor<'_>) -> Match<T> {
        let Some(unit) = cursor.first() else {
            return Ok(None);
        };
        Ok(self
            .lookup(unit)
            .map(|token| Analysis::new(token.clone(), unit.len_utf8())))
    }

    fn name(&self) -> &str {
        &self.label
    }
}
