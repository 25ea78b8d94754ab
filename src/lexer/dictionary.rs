//! Keyword dictionary for a dialect.

use alloc::string::String;
use hashbrown::HashMap;

use super::token::Keyword;
use crate::dialect::Dialect;

/// Maps upper-cased words to the keywords a dialect recognizes.
///
/// A dictionary is immutable once built and can be shared between
/// concurrent parses.
#[derive(Debug, Clone)]
pub struct Dictionary {
    keywords: HashMap<&'static str, Keyword>,
}

impl Dictionary {
    /// Builds the dictionary for `dialect`: the default keywords plus the
    /// dialect's own.
    #[must_use]
    pub fn new(dialect: &Dialect) -> Self {
        let keywords = Keyword::DEFAULT
            .iter()
            .chain(dialect.keywords)
            .map(|&keyword| (keyword.as_str(), keyword))
            .collect();
        Self { keywords }
    }

    /// Looks up a word, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, word: &str) -> Option<Keyword> {
        if word.bytes().any(|b| b.is_ascii_lowercase()) {
            let upper: String = word.to_ascii_uppercase();
            self.keywords.get(upper.as_str()).copied()
        } else {
            self.keywords.get(word).copied()
        }
    }

    /// Number of recognized keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the dictionary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
