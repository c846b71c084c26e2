//! Analysis configuration.
//!
//! Serializable so host applications can keep grammar settings next to the
//! rest of their configuration:
//!
//! ```json
//! { "ignored": { "only": [" ", "\t"] }, "recursion_limit": 64 }
//! ```

use std::collections::BTreeSet;

/// Default bound on nested branch analysis.
pub const DEFAULT_RECURSION_LIMIT: u32 = 4096;

/// Characters the tokenizer skips while looking for the start of a token.
///
/// Ignored characters may still appear inside tokens (a quoted literal can
/// contain spaces); they just never start one.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredChars {
    /// Anything `char::is_whitespace` accepts, newlines included.
    #[default]
    Whitespace,
    /// Skip nothing: every character must belong to some token.
    Nothing,
    /// Exactly these characters.
    Only(BTreeSet<char>),
}

impl IgnoredChars {
    pub fn only(chars: impl IntoIterator<Item = char>) -> Self {
        Self::Only(chars.into_iter().collect())
    }

    pub fn contains(&self, unit: char) -> bool {
        match self {
            Self::Whitespace => unit.is_whitespace(),
            Self::Nothing => false,
            Self::Only(chars) => chars.contains(&unit),
        }
    }
}

/// Settings shared by [`Tokenizer`](crate::Tokenizer) and [`Parser`](crate::Parser).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub ignored: IgnoredChars,
    pub recursion_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignored: IgnoredChars::default(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl Config {
    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn with_ignored(mut self, ignored: IgnoredChars) -> Self {
        self.ignored = ignored;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }
}
