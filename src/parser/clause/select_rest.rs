use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine};

/// Set operators, which would combine results across shards.
const SET_OPERATORS: &[Keyword] = &[
    Keyword::Union,
    Keyword::Intersect,
    Keyword::Except,
    Keyword::Minus,
];

/// Rejects what may not follow a complete `SELECT`.
#[derive(Debug, Clone, Copy)]
pub struct SelectRestClauseParser {
    dialect: &'static Dialect,
}

impl SelectRestClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the clause.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedToken`] on a set operator or one of
    /// the dialect's unsupported keywords.
    pub fn parse(&self, lexer: &LexerEngine<'_>) -> Result<(), ParseError> {
        lexer.unsupported_if_equal(SET_OPERATORS)?;
        lexer.unsupported_if_equal(self.dialect.unsupported_select_rest)
    }
}
