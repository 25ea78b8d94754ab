use super::facade::UpdateClauseParserFacade;
use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, TokenKind};
use crate::statement::UpdateStatement;

/// Parses single-table `UPDATE` statements.
#[derive(Debug, Clone, Copy)]
pub struct UpdateParser {
    dialect: &'static Dialect,
    facade: UpdateClauseParserFacade,
}

impl UpdateParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            dialect,
            facade: UpdateClauseParserFacade::new(dialect),
        }
    }

    /// Parses the statement starting at the `UPDATE` keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedOperation`] for more than one table
    /// and the first error raised by a clause parser.
    pub fn parse(&self, lexer: &mut LexerEngine<'_>) -> Result<UpdateStatement, ParseError> {
        let facade = &self.facade;
        let mut statement = UpdateStatement::default();
        lexer.accept(Keyword::Update)?;
        lexer.skip_all(self.dialect.skipped_between_update_and_table)?;
        facade
            .table_references
            .parse(lexer, statement.as_mut(), true)?;
        facade.update_set_items.parse(lexer, &mut statement)?;
        lexer.skip_until(&[TokenKind::Keyword(Keyword::Where)], statement.as_mut())?;
        facade.where_clause.parse(lexer, statement.as_mut())?;
        lexer.skip_rest(statement.as_mut())?;
        Ok(statement)
    }
}
