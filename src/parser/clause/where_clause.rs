use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Symbol, TokenKind};
use crate::parser::expression::{AliasExpressionParser, BasicExpressionParser};
use crate::statement::{Column, Condition, ShardingOperator, SqlExpression, SqlStatement, Tables};

/// Comparison operators that are consumed without recording a condition.
const OTHER_OPERATORS: &[TokenKind] = &[
    TokenKind::Symbol(Symbol::Lt),
    TokenKind::Symbol(Symbol::Gt),
    TokenKind::Symbol(Symbol::LtEq),
    TokenKind::Symbol(Symbol::GtEq),
    TokenKind::Symbol(Symbol::LtGt),
    TokenKind::Symbol(Symbol::BangEq),
    TokenKind::Symbol(Symbol::BangGt),
    TokenKind::Symbol(Symbol::BangLt),
    TokenKind::Symbol(Symbol::LtEqGt),
    TokenKind::Keyword(Keyword::Like),
];

/// Parses `WHERE` into sharding conditions.
///
/// Only `AND`-joined comparisons are supported. `=`, `IN` and `BETWEEN`
/// against literals or placeholders record a [`Condition`]; other
/// comparisons are consumed and dropped.
#[derive(Debug, Clone, Copy)]
pub struct WhereClauseParser {
    dialect: &'static Dialect,
    alias: AliasExpressionParser,
}

impl WhereClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            dialect,
            alias: AliasExpressionParser::new(dialect),
        }
    }

    /// Parses an optional table alias followed by an optional `WHERE` clause.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedToken`] on `OR`, and syntax errors
    /// for malformed comparisons or input ending where a comparison is due.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
    ) -> Result<(), ParseError> {
        self.alias.parse_table_alias(lexer)?;
        if lexer.skip_if_keyword(&[Keyword::Where])? {
            loop {
                self.parse_comparison_condition(lexer, statement)?;
                if !lexer.skip_if_keyword(&[Keyword::And])? {
                    break;
                }
            }
            lexer.unsupported_if_equal(&[Keyword::Or])?;
        }
        Ok(())
    }

    fn parse_comparison_condition(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
    ) -> Result<(), ParseError> {
        if lexer.is_end() {
            return Err(lexer.syntax_error());
        }
        lexer.skip_if_symbol(Symbol::LeftParen)?;
        let left = BasicExpressionParser.parse(lexer, statement)?;

        if lexer.skip_if_symbol(Symbol::Eq)? {
            let right = BasicExpressionParser.parse(lexer, statement)?;
            add_condition(statement, &left, ShardingOperator::Equal, vec![right]);
        } else if lexer.skip_if_keyword(&[Keyword::In])? {
            let values = parse_in_list(lexer, statement)?;
            add_condition(statement, &left, ShardingOperator::In, values);
        } else if lexer.skip_if_keyword(&[Keyword::Between])? {
            let values = parse_between(lexer, statement)?;
            add_condition(statement, &left, ShardingOperator::Between, values);
        } else if lexer.skip_if_keyword(&[Keyword::Not])? {
            self.parse_negated_condition(lexer, statement)?;
        } else if lexer.skip_if_keyword(&[Keyword::Is])? {
            lexer.skip_if_keyword(&[Keyword::Not])?;
            BasicExpressionParser.parse(lexer, statement)?;
        } else if lexer.skip_if_equal(OTHER_OPERATORS)?
            || lexer.skip_if_keyword(self.dialect.condition_operators)?
        {
            BasicExpressionParser.parse(lexer, statement)?;
        }

        lexer.skip_if_symbol(Symbol::RightParen)?;
        Ok(())
    }

    /// Parses the rest of `NOT IN`, `NOT BETWEEN`, `NOT LIKE` and negated
    /// dialect operators. None of them narrows the shards.
    fn parse_negated_condition(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
    ) -> Result<(), ParseError> {
        if lexer.skip_if_keyword(&[Keyword::In])? {
            parse_in_list(lexer, statement)?;
        } else if lexer.skip_if_keyword(&[Keyword::Between])? {
            parse_between(lexer, statement)?;
        } else if lexer.skip_if_keyword(&[Keyword::Like])?
            || lexer.skip_if_keyword(self.dialect.condition_operators)?
        {
            BasicExpressionParser.parse(lexer, statement)?;
        } else {
            return Err(lexer.syntax_error());
        }
        Ok(())
    }
}

fn parse_in_list(
    lexer: &mut LexerEngine<'_>,
    statement: &mut SqlStatement,
) -> Result<Vec<SqlExpression>, ParseError> {
    lexer.accept(Symbol::LeftParen)?;
    if lexer.equal_any_keyword(&[Keyword::Select]) {
        return Err(ParseError::UnsupportedOperation("Cannot support subquery."));
    }
    let mut values = Vec::new();
    loop {
        values.push(BasicExpressionParser.parse(lexer, statement)?);
        if !lexer.skip_if_symbol(Symbol::Comma)? {
            break;
        }
    }
    lexer.accept(Symbol::RightParen)?;
    Ok(values)
}

fn parse_between(
    lexer: &mut LexerEngine<'_>,
    statement: &mut SqlStatement,
) -> Result<Vec<SqlExpression>, ParseError> {
    let low = BasicExpressionParser.parse(lexer, statement)?;
    lexer.accept(Keyword::And)?;
    let high = BasicExpressionParser.parse(lexer, statement)?;
    Ok(vec![low, high])
}

fn add_condition(
    statement: &mut SqlStatement,
    left: &SqlExpression,
    operator: ShardingOperator,
    values: Vec<SqlExpression>,
) {
    if !values.iter().all(SqlExpression::is_value) {
        return;
    }
    if let Some(column) = find_column(statement.tables(), left) {
        statement.conditions_mut().add(Condition {
            column,
            operator,
            values,
        });
    }
}

/// Resolves a column reference against the statement's tables.
///
/// `owner.name` resolves through table names and aliases. A bare name only
/// resolves when the statement has a single table.
pub(crate) fn find_column(tables: &Tables, expression: &SqlExpression) -> Option<Column> {
    match expression {
        SqlExpression::Property { owner, name } => tables
            .find(owner)
            .map(|table| Column::new(name.clone(), Some(table.name.clone()))),
        SqlExpression::Identifier(name) if tables.len() == 1 => Some(Column::new(
            name.clone(),
            tables.single_table_name().map(String::from),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::clause::test_support::with_lexer;
    use crate::statement::{SqlNumber, Table};

    fn parse(sql: &str, tables: &[Table]) -> Result<SqlStatement, ParseError> {
        with_lexer(sql, &Dialect::MYSQL, |lexer| {
            let mut statement = SqlStatement::default();
            for table in tables {
                statement.tables_mut().add(table.clone());
            }
            WhereClauseParser::new(&Dialect::MYSQL).parse(lexer, &mut statement)?;
            assert!(lexer.is_end(), "stopped at {:?}", lexer.current());
            Ok(statement)
        })
    }

    #[test]
    fn test_equal_in_and_between_are_recorded() {
        let statement = parse(
            "WHERE user_id = ? AND order_id IN (1, 2) AND status BETWEEN 'a' AND ?",
            &[Table::new("t_order", None)],
        )
        .unwrap();
        let conditions = statement.conditions();
        assert_eq!(conditions.len(), 3);
        assert_eq!(
            conditions.find("t_order", "user_id").unwrap().values,
            [SqlExpression::Placeholder(0)]
        );
        let in_condition = conditions.find("t_order", "order_id").unwrap();
        assert_eq!(in_condition.operator, ShardingOperator::In);
        assert_eq!(
            in_condition.values,
            [
                SqlExpression::Number(SqlNumber::Integer(1)),
                SqlExpression::Number(SqlNumber::Integer(2)),
            ]
        );
        let between = conditions.find("t_order", "status").unwrap();
        assert_eq!(between.operator, ShardingOperator::Between);
        assert_eq!(statement.parameters_index(), 2);
    }

    #[test]
    fn test_alias_owner_resolves_to_table() {
        let statement = parse(
            "WHERE o.user_id = 10 AND i.order_id = ?",
            &[
                Table::new("t_order", Some("o".into())),
                Table::new("t_order_item", Some("i".into())),
            ],
        )
        .unwrap();
        assert!(statement.conditions().find("t_order", "user_id").is_some());
        assert!(
            statement
                .conditions()
                .find("t_order_item", "order_id")
                .is_some()
        );
        assert!(statement.sql_tokens().is_empty());
    }

    #[test]
    fn test_bare_column_is_ambiguous_with_two_tables() {
        let statement = parse(
            "WHERE user_id = 10",
            &[Table::new("a", None), Table::new("b", None)],
        )
        .unwrap();
        assert!(statement.conditions().is_empty());
    }

    #[test]
    fn test_other_comparisons_are_skipped() {
        let statement = parse(
            "WHERE a > ? AND b <> 1 AND c LIKE 'x%' AND d IS NOT NULL AND e NOT IN (?, ?) \
             AND f REGEXP '^a' AND (g = 1) AND h NOT BETWEEN 1 AND 2 AND i = j",
            &[Table::new("t", None)],
        )
        .unwrap();
        assert_eq!(statement.parameters_index(), 3);
        let columns: Vec<&str> = statement
            .conditions()
            .iter()
            .map(|condition| condition.column.name.as_str())
            .collect();
        assert_eq!(columns, ["g"]);
    }

    #[test]
    fn test_or_is_unsupported() {
        assert_eq!(
            parse("WHERE a = 1 OR b = 2", &[Table::new("t", None)]).unwrap_err(),
            ParseError::UnsupportedToken(TokenKind::Keyword(Keyword::Or))
        );
    }

    #[test]
    fn test_missing_comparison() {
        for (sql, position) in [("WHERE", 5), ("WHERE a = 1 AND", 15)] {
            assert_eq!(
                parse(sql, &[Table::new("t", None)]).unwrap_err(),
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
    fn test_negative_operands_keep_the_clause_going() {
        let statement = parse(
            "WHERE a > -1 AND b = -? AND c = -2",
            &[Table::new("t", None)],
        )
        .unwrap();
        assert_eq!(
            statement.conditions().find("t", "c").unwrap().values,
            [SqlExpression::Number(SqlNumber::Integer(-2))]
        );
        assert!(statement.conditions().find("t", "b").is_none());
        assert_eq!(statement.parameters_index(), 1);
    }

    #[test]
    fn test_subquery_in_list_is_unsupported() {
        assert!(matches!(
            parse("WHERE a IN (SELECT id FROM t)", &[Table::new("t", None)]),
            Err(ParseError::UnsupportedOperation(_))
        ));
    }
}
