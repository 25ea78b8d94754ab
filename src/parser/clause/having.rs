use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine};

/// Rejects `HAVING`, which cannot be evaluated per shard.
#[derive(Debug, Clone, Copy, Default)]
pub struct HavingClauseParser;

impl HavingClauseParser {
    /// Parses the clause.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedToken`] on `HAVING`.
    pub fn parse(self, lexer: &LexerEngine<'_>) -> Result<(), ParseError> {
        lexer.unsupported_if_equal(&[Keyword::Having])
    }
}
