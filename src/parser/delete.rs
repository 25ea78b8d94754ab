use super::facade::DeleteClauseParserFacade;
use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, TokenKind};
use crate::statement::DeleteStatement;

/// Parses single-table `DELETE` statements.
#[derive(Debug, Clone, Copy)]
pub struct DeleteParser {
    dialect: &'static Dialect,
    facade: DeleteClauseParserFacade,
}

impl DeleteParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            dialect,
            facade: DeleteClauseParserFacade::new(dialect),
        }
    }

    /// Parses the statement starting at the `DELETE` keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedOperation`] for more than one table
    /// and the first error raised by a clause parser.
    pub fn parse(&self, lexer: &mut LexerEngine<'_>) -> Result<DeleteStatement, ParseError> {
        let facade = &self.facade;
        let mut statement = DeleteStatement::default();
        lexer.accept(Keyword::Delete)?;
        lexer.skip_all(self.dialect.skipped_between_delete_and_table)?;
        lexer.skip_if_keyword(&[Keyword::From])?;
        facade
            .table_references
            .parse(lexer, statement.as_mut(), true)?;
        lexer.skip_until(&[TokenKind::Keyword(Keyword::Where)], statement.as_mut())?;
        facade.where_clause.parse(lexer, statement.as_mut())?;
        lexer.skip_rest(statement.as_mut())?;
        Ok(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DatabaseType;
    use crate::lexer::Dictionary;

    fn parse(sql: &str, dialect: &'static Dialect) -> Result<DeleteStatement, ParseError> {
        let dictionary = Dictionary::new(dialect);
        let mut lexer = LexerEngine::new(sql, &dictionary, DatabaseType::MySql, dialect)?;
        DeleteParser::new(dialect).parse(&mut lexer)
    }

    #[test]
    fn test_delete() {
        let statement = parse(
            "DELETE LOW_PRIORITY QUICK FROM t_order WHERE order_id IN (?, ?)",
            &Dialect::MYSQL,
        )
        .unwrap();
        assert_eq!(statement.as_ref().tables().single_table_name(), Some("t_order"));
        let condition = statement
            .as_ref()
            .conditions()
            .find("t_order", "order_id")
            .unwrap();
        assert_eq!(condition.values.len(), 2);
        assert_eq!(statement.as_ref().parameters_index(), 2);
    }

    #[test]
    fn test_from_is_optional() {
        let statement = parse("DELETE t_order WHERE order_id = 1", &Dialect::MYSQL).unwrap();
        assert_eq!(statement.as_ref().conditions().len(), 1);
    }

    #[test]
    fn test_modifiers_are_dialect_only() {
        let statement = parse("DELETE QUICK FROM t_order", &Dialect::STANDARD).unwrap();
        assert_eq!(statement.as_ref().tables().single_table_name(), Some("QUICK"));
    }
}
