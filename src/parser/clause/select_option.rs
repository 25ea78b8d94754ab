use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::LexerEngine;

/// Skips the dialect's select options, such as `SQL_CALC_FOUND_ROWS`.
#[derive(Debug, Clone, Copy)]
pub struct SelectOptionClauseParser {
    dialect: &'static Dialect,
}

impl SelectOptionClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the clause.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn parse(&self, lexer: &mut LexerEngine<'_>) -> Result<(), ParseError> {
        lexer.skip_all(self.dialect.select_options)
    }
}
