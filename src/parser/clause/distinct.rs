use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine};

/// Rejects `DISTINCT` and its dialect synonyms after `SELECT`; skips `ALL`.
#[derive(Debug, Clone, Copy)]
pub struct DistinctClauseParser {
    dialect: &'static Dialect,
}

impl DistinctClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the clause.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedToken`] on `DISTINCT` or a synonym.
    pub fn parse(&self, lexer: &mut LexerEngine<'_>) -> Result<(), ParseError> {
        lexer.skip_all(&[Keyword::All])?;
        lexer.unsupported_if_equal(&[Keyword::Distinct])?;
        lexer.unsupported_if_equal(self.dialect.distinct_synonyms)
    }
}
