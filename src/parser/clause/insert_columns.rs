use alloc::string::String;

use crate::errors::ParseError;
use crate::lexer::{LexerEngine, Literal, Symbol, TokenKind};
use crate::parser::exact_value;
use crate::statement::{Column, InsertStatement};

/// Parses the parenthesized column list of an insert.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertColumnsClauseParser;

impl InsertColumnsClauseParser {
    /// Parses `(a, b, ...)` if present, qualifying every column with the
    /// insert table.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if a column is not an identifier or the list
    /// is not closed.
    pub fn parse(
        self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut InsertStatement,
    ) -> Result<(), ParseError> {
        if !lexer.skip_if_symbol(Symbol::LeftParen)? {
            return Ok(());
        }
        let table_name = statement.table_name().map(String::from);
        loop {
            if lexer.current().kind != TokenKind::Literal(Literal::Identifier) {
                return Err(lexer.syntax_error());
            }
            let name = exact_value(&lexer.current().literal);
            statement.columns.push(Column::new(name, table_name.clone()));
            lexer.next()?;
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }
        statement.columns_list_last_position = Some(lexer.current().begin_position());
        lexer.accept(Symbol::RightParen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::parser::clause::test_support::with_lexer;
    use crate::statement::Table;

    fn parse(sql: &str) -> Result<InsertStatement, ParseError> {
        with_lexer(sql, &Dialect::MYSQL, |lexer| {
            let mut statement = InsertStatement::default();
            statement
                .as_mut()
                .tables_mut()
                .add(Table::new("t_order", None));
            InsertColumnsClauseParser.parse(lexer, &mut statement)?;
            Ok(statement)
        })
    }

    #[test]
    fn test_columns() {
        let statement = parse("(`user_id`, status) VALUES").unwrap();
        assert_eq!(
            statement.columns,
            [
                Column::new("user_id", Some("t_order".into())),
                Column::new("status", Some("t_order".into())),
            ]
        );
        assert_eq!(statement.columns_list_last_position, Some(18));
    }

    #[test]
    fn test_without_column_list() {
        let statement = parse("VALUES (1)").unwrap();
        assert!(statement.columns.is_empty());
        assert_eq!(statement.columns_list_last_position, None);
    }

    #[test]
    fn test_malformed_column_list() {
        assert!(matches!(
            parse("(a, 1)"),
            Err(ParseError::Syntax {
                kind: TokenKind::Literal(Literal::Int),
                position: 4,
                ..
            })
        ));
        assert!(matches!(
            parse("(a b)"),
            Err(ParseError::UnmatchedToken { .. })
        ));
    }
}
