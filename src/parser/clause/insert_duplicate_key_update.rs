use alloc::string::String;

use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::expression::BasicExpressionParser;
use crate::statement::{Column, InsertStatement, SqlExpression};

/// Parses `ON DUPLICATE KEY UPDATE a = VALUES(a), b = b + 1`.
#[derive(Debug, Clone, Copy)]
pub struct InsertDuplicateKeyUpdateClauseParser {
    dialect: &'static Dialect,
}

impl InsertDuplicateKeyUpdateClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the clause if the current token introduces it, recording the
    /// assigned columns.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnmatchedToken`] if `DUPLICATE KEY UPDATE` or an
    /// `=` is missing, and a syntax error if a target is not a column.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut InsertStatement,
    ) -> Result<(), ParseError> {
        if !lexer.skip_if_keyword(self.dialect.duplicate_key_update_keywords)? {
            return Ok(());
        }
        lexer.accept(Keyword::Duplicate)?;
        lexer.accept(Keyword::Key)?;
        lexer.accept(Keyword::Update)?;
        let table_name = statement.table_name().map(String::from);
        loop {
            let name = match BasicExpressionParser.parse(lexer, statement.as_mut())? {
                SqlExpression::Identifier(name) | SqlExpression::Property { name, .. } => name,
                _ => return Err(lexer.syntax_error()),
            };
            statement
                .duplicate_key_update_columns
                .push(Column::new(name, table_name.clone()));
            lexer.accept(Symbol::Eq)?;
            if lexer.skip_if_keyword(&[Keyword::Values])? {
                lexer.accept(Symbol::LeftParen)?;
                BasicExpressionParser.parse(lexer, statement.as_mut())?;
                lexer.accept(Symbol::RightParen)?;
            } else {
                BasicExpressionParser.parse(lexer, statement.as_mut())?;
            }
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::clause::test_support::with_lexer;
    use crate::statement::Table;
    use alloc::vec::Vec;

    fn parse(sql: &str) -> Result<InsertStatement, ParseError> {
        with_lexer(sql, &Dialect::MYSQL, |lexer| {
            let mut statement = InsertStatement::default();
            statement
                .as_mut()
                .tables_mut()
                .add(Table::new("t_order", None));
            InsertDuplicateKeyUpdateClauseParser::new(&Dialect::MYSQL)
                .parse(lexer, &mut statement)?;
            assert!(lexer.is_end());
            Ok(statement)
        })
    }

    #[test]
    fn test_duplicate_key_update_columns() {
        let statement =
            parse("ON DUPLICATE KEY UPDATE status = VALUES(status), total = total + ?, note = ?")
                .unwrap();
        let names: Vec<&str> = statement
            .duplicate_key_update_columns
            .iter()
            .map(|column| column.name.as_str())
            .collect();
        assert_eq!(names, ["status", "total", "note"]);
        assert_eq!(
            statement.duplicate_key_update_columns[0].table_name.as_deref(),
            Some("t_order")
        );
        assert_eq!(statement.as_ref().parameters_index(), 2);
        assert!(statement.as_ref().conditions().is_empty());
    }

    #[test]
    fn test_incomplete_clause() {
        assert!(matches!(
            parse("ON DUPLICATE UPDATE a = 1"),
            Err(ParseError::UnmatchedToken {
                expected: crate::lexer::TokenKind::Keyword(Keyword::Key),
                ..
            })
        ));
    }
}
