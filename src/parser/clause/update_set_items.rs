use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Symbol, TokenKind};
use crate::parser::expression::BasicExpressionParser;
use crate::statement::UpdateStatement;

use super::find_column;

const ASSIGNMENT_OPERATORS: &[TokenKind] = &[
    TokenKind::Symbol(Symbol::Eq),
    TokenKind::Symbol(Symbol::ColonEq),
];

/// Parses `SET a = 1, t.b := ?` of an update.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateSetItemsClauseParser;

impl UpdateSetItemsClauseParser {
    /// Parses the assignments into `statement.assignments`.
    ///
    /// A target qualified by the table name registers a table token. A
    /// parenthesized target list is skipped without recording assignments.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnmatchedToken`] if `SET` is missing, and a
    /// syntax error if the input ends where an assignment is due.
    pub fn parse(
        self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut UpdateStatement,
    ) -> Result<(), ParseError> {
        lexer.accept(Keyword::Set)?;
        loop {
            if lexer.is_end() {
                return Err(lexer.syntax_error());
            }
            let target = BasicExpressionParser.parse(lexer, statement.as_mut())?;
            lexer.skip_if_equal(ASSIGNMENT_OPERATORS)?;
            if lexer.is_end() {
                return Err(lexer.syntax_error());
            }
            let value = BasicExpressionParser.parse(lexer, statement.as_mut())?;
            if let Some(column) = find_column(statement.as_ref().tables(), &target) {
                statement.assignments.push((column, value));
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
    use crate::dialect::Dialect;
    use crate::parser::clause::test_support::with_lexer;
    use crate::statement::{Column, SqlExpression, SqlNumber, SqlToken, Table};

    fn parse(sql: &str) -> Result<UpdateStatement, ParseError> {
        with_lexer(sql, &Dialect::MYSQL, |lexer| {
            let mut statement = UpdateStatement::default();
            statement
                .as_mut()
                .tables_mut()
                .add(Table::new("t_order", Some("o".into())));
            UpdateSetItemsClauseParser.parse(lexer, &mut statement)?;
            Ok(statement)
        })
    }

    #[test]
    fn test_assignments() {
        let statement =
            parse("SET status = ?, t_order.total := 10, o.note = concat(note, ?) WHERE").unwrap();
        assert_eq!(
            statement.assignments,
            [
                (
                    Column::new("status", Some("t_order".into())),
                    SqlExpression::Placeholder(0),
                ),
                (
                    Column::new("total", Some("t_order".into())),
                    SqlExpression::Number(SqlNumber::Integer(10)),
                ),
                (
                    Column::new("note", Some("t_order".into())),
                    SqlExpression::Ignore("concat(note, ?)".into()),
                ),
            ]
        );
        assert_eq!(
            statement.as_ref().sql_tokens(),
            [SqlToken::Table {
                begin_position: 16,
                original_literals: "t_order".into(),
            }]
        );
        assert_eq!(statement.as_ref().parameters_index(), 2);
    }

    #[test]
    fn test_parenthesized_targets_are_skipped() {
        let statement = parse("SET (a, b) = (?, ?)").unwrap();
        assert!(statement.assignments.is_empty());
        assert_eq!(statement.as_ref().parameters_index(), 2);
    }

    #[test]
    fn test_missing_assignment() {
        for (sql, position) in [("SET", 3), ("SET status =", 12), ("SET a = 1,", 10)] {
            assert_eq!(
                parse(sql).unwrap_err(),
                ParseError::Syntax {
                    kind: TokenKind::End,
                    literal: "".into(),
                    position,
                },
                "{sql}"
            );
        }
    }

    #[test]
    fn test_missing_set() {
        assert!(matches!(
            parse("status = 1"),
            Err(ParseError::UnmatchedToken { .. })
        ));
    }
}
