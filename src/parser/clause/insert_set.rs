use alloc::string::String;

use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Literal, Symbol, TokenKind};
use crate::parser::expression::{BasicExpressionParser, source_text};
use crate::statement::{Column, Conditions, InsertStatement, InsertValue, SqlExpression, SqlToken};

use super::insert_values::column_condition;

/// Parses the `INSERT ... SET a = 1, b = ?` form.
#[derive(Debug, Clone, Copy)]
pub struct InsertSetClauseParser {
    dialect: &'static Dialect,
}

impl InsertSetClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the assignments if the current token is one of the dialect's
    /// insert-set keywords. They are recorded as a single row.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if an assignment target is not a column and
    /// [`ParseError::UnmatchedToken`] if `=` is missing.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut InsertStatement,
    ) -> Result<(), ParseError> {
        if !lexer.skip_if_keyword(self.dialect.insert_set_keywords)? {
            return Ok(());
        }
        let begin_position = lexer.current().begin_position();
        let parameters_before = statement.as_ref().parameters_index();
        let table_name = statement.table_name().map(String::from);
        statement.as_mut().add_sql_token(SqlToken::InsertValues {
            begin_position,
            table_name: table_name.clone().unwrap_or_default(),
        });

        let mut conditions = Conditions::default();
        loop {
            if lexer.current().kind != TokenKind::Literal(Literal::Identifier) {
                return Err(lexer.syntax_error());
            }
            let column = match BasicExpressionParser.parse(lexer, statement.as_mut())? {
                SqlExpression::Identifier(name) | SqlExpression::Property { name, .. } => {
                    Column::new(name, table_name.clone())
                }
                _ => return Err(lexer.syntax_error()),
            };
            lexer.accept(Symbol::Eq)?;
            let value = BasicExpressionParser.parse(lexer, statement.as_mut())?;
            if let Some(condition) = column_condition(&column, value) {
                conditions.add(condition);
            }
            statement.columns.push(column);
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }

        let expression = source_text(lexer, begin_position);
        statement.values_list_last_position = Some(begin_position + expression.len());
        statement.insert_values.push(InsertValue {
            keyword: Keyword::Set,
            expression,
            parameters_count: statement.as_ref().parameters_index() - parameters_before,
        });
        *statement.as_mut().conditions_mut() = conditions.clone();
        statement.row_conditions.push(conditions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::clause::test_support::with_lexer;
    use crate::statement::Table;

    fn parse(sql: &str, dialect: &'static Dialect) -> Result<InsertStatement, ParseError> {
        with_lexer(sql, dialect, |lexer| {
            let mut statement = InsertStatement::default();
            statement
                .as_mut()
                .tables_mut()
                .add(Table::new("t_order", None));
            InsertSetClauseParser::new(dialect).parse(lexer, &mut statement)?;
            Ok(statement)
        })
    }

    #[test]
    fn test_set_assignments() {
        let statement = parse("SET user_id = ?, status = 'init', total = price * 2", &Dialect::MYSQL)
            .unwrap();
        let names: alloc::vec::Vec<&str> =
            statement.columns.iter().map(|column| column.name.as_str()).collect();
        assert_eq!(names, ["user_id", "status", "total"]);
        assert_eq!(
            statement.insert_values,
            [InsertValue {
                keyword: Keyword::Set,
                expression: "user_id = ?, status = 'init', total = price * 2".into(),
                parameters_count: 1,
            }]
        );
        assert_eq!(statement.values_list_last_position, Some(51));
        let conditions = statement.as_ref().conditions();
        assert_eq!(conditions.len(), 2);
        assert_eq!(
            conditions.find("t_order", "user_id").unwrap().values,
            [SqlExpression::Placeholder(0)]
        );
        assert_eq!(
            statement.as_ref().sql_tokens(),
            [SqlToken::InsertValues {
                begin_position: 4,
                table_name: "t_order".into(),
            }]
        );
    }

    #[test]
    fn test_set_form_is_dialect_only() {
        let statement = parse("SET user_id = 1", &Dialect::STANDARD).unwrap();
        assert!(statement.insert_values.is_empty());
    }

    #[test]
    fn test_set_requires_column() {
        assert!(matches!(
            parse("SET 1 = 1", &Dialect::MYSQL),
            Err(ParseError::Syntax { position: 4, .. })
        ));
        assert!(matches!(
            parse("SET a 1", &Dialect::MYSQL),
            Err(ParseError::UnmatchedToken { .. })
        ));
    }
}
