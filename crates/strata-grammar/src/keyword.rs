//! Fixed-word tokens.

use strata_core::{Analysis, Cursor, Match, TokenDescriptor};

use crate::{GrammarError, Result};

/// Matches a fixed, non-empty word.
///
/// Register keywords ahead of identifier descriptors so the keyword wins.
/// Plain keywords also match the front of longer words (`unless` in
/// `unlessx`); [`whole_word`](Self::whole_word) turns that off.
#[derive(Debug, Clone)]
pub struct KeywordDescriptor<T> {
    keyword: String,
    token: T,
    whole_word: bool,
}

impl<T: Clone> KeywordDescriptor<T> {
    pub fn new(keyword: impl Into<String>, token: T) -> Result<Self> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(GrammarError::EmptyKeyword);
        }
        Ok(Self {
            keyword,
            token,
            whole_word: false,
        })
    }

    /// Refuse the match when the keyword is directly followed by an
    /// identifier character (alphanumeric or `_`).
    pub fn whole_word(mut self) -> Self {
        self.whole_word = true;
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

impl<T: Clone + Send + Sync> TokenDescriptor<T> for KeywordDescriptor<T> {
    fn first(&self, cursor: Cursor<'_>) -> Match<T> {
        let Some(after) = cursor.remainder().strip_prefix(self.keyword.as_str()) else {
            return Ok(None);
        };
        if self.whole_word && after.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            return Ok(None);
        }
        Ok(Some(Analysis::new(self.token.clone(), self.keyword.len())))
    }

    fn name(&self) -> &str {
        &self.keyword
    }
}
