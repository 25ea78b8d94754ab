use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Symbol, TokenKind};
use crate::parser::expression::BasicExpressionParser;
use crate::statement::{
    Column, Condition, Conditions, InsertStatement, InsertValue, ShardingOperator, SqlExpression,
    SqlToken,
};

/// Parses `VALUES (...), (...)` and its dialect synonyms.
///
/// Each row is zipped with the column list; columns assigned a literal or a
/// placeholder become sharding conditions of that row.
#[derive(Debug, Clone, Copy)]
pub struct InsertValuesClauseParser {
    dialect: &'static Dialect,
}

impl InsertValuesClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    fn values_keyword(&self, lexer: &LexerEngine<'_>) -> Option<Keyword> {
        match lexer.current().kind {
            TokenKind::Keyword(keyword)
                if keyword == Keyword::Values || self.dialect.values_synonyms.contains(&keyword) =>
            {
                Some(keyword)
            }
            _ => None,
        }
    }

    /// Parses the rows if the current token introduces them.
    ///
    /// # Errors
    ///
    /// Returns an error if a row is not parenthesized, and
    /// [`ParseError::UnsupportedOperation`] if a row's value count differs
    /// from the column count.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut InsertStatement,
    ) -> Result<(), ParseError> {
        let Some(keyword) = self.values_keyword(lexer) else {
            return Ok(());
        };
        lexer.next()?;
        let table_name = statement.table_name().map(String::from).unwrap_or_default();
        statement.as_mut().add_sql_token(SqlToken::InsertValues {
            begin_position: lexer.current().begin_position(),
            table_name,
        });
        loop {
            let end_position = parse_row(lexer, statement, keyword)?;
            statement.values_list_last_position = Some(end_position);
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }
        if let Some(first) = statement.row_conditions.first() {
            *statement.as_mut().conditions_mut() = first.clone();
        }
        Ok(())
    }
}

/// Parses one parenthesized row and returns the offset just past its `)`.
fn parse_row(
    lexer: &mut LexerEngine<'_>,
    statement: &mut InsertStatement,
    keyword: Keyword,
) -> Result<usize, ParseError> {
    let begin_position = lexer.current().begin_position();
    let parameters_before = statement.as_ref().parameters_index();
    lexer.accept(Symbol::LeftParen)?;
    let mut values = Vec::new();
    loop {
        values.push(BasicExpressionParser.parse(lexer, statement.as_mut())?);
        if !lexer.skip_if_symbol(Symbol::Comma)? {
            break;
        }
    }
    let end_position = lexer.current().end_position;
    lexer.accept(Symbol::RightParen)?;

    if !statement.columns.is_empty() && statement.columns.len() != values.len() {
        return Err(ParseError::UnsupportedOperation(
            "Column count doesn't match value count.",
        ));
    }
    let mut conditions = Conditions::default();
    for (column, value) in statement.columns.iter().zip(values) {
        if let Some(condition) = column_condition(column, value) {
            conditions.add(condition);
        }
    }
    statement.row_conditions.push(conditions);
    statement.insert_values.push(InsertValue {
        keyword,
        expression: String::from(&lexer.input()[begin_position..end_position]),
        parameters_count: statement.as_ref().parameters_index() - parameters_before,
    });
    Ok(end_position)
}

/// An equality condition for `column`, if `value` is a literal or a
/// placeholder.
pub(super) fn column_condition(column: &Column, value: SqlExpression) -> Option<Condition> {
    value.is_value().then(|| Condition {
        column: column.clone(),
        operator: ShardingOperator::Equal,
        values: vec![value],
    })
}
