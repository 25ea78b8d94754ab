use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::expression::BasicExpressionParser;
use crate::statement::{OrderItem, SelectStatement, SqlExpression, SqlNumber};

use super::group_by::{order_item, parse_order_direction};

/// Parses `ORDER BY` items.
#[derive(Debug, Clone, Copy)]
pub struct OrderByClauseParser {
    dialect: &'static Dialect,
}

impl OrderByClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the clause if the current token is `ORDER`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if `BY` is missing or an item is neither a
    /// select list position, a column nor an expression.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SelectStatement,
    ) -> Result<(), ParseError> {
        if !lexer.skip_if_keyword(&[Keyword::Order])? {
            return Ok(());
        }
        lexer.accept(Keyword::By)?;
        loop {
            let item = self.parse_order_by_item(lexer, statement)?;
            statement.order_by_items.push(item);
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }
        Ok(())
    }

    fn parse_order_by_item(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SelectStatement,
    ) -> Result<OrderItem, ParseError> {
        if lexer.is_end() {
            return Err(lexer.syntax_error());
        }
        let expression = BasicExpressionParser.parse(lexer, statement.as_mut())?;
        let order_direction = parse_order_direction(lexer)?;
        let null_order_direction = self.dialect.null_order_direction;
        if let SqlExpression::Number(SqlNumber::Integer(index)) = expression {
            return usize::try_from(index)
                .ok()
                .filter(|&index| index > 0)
                .map(|index| OrderItem::indexed(index, order_direction, null_order_direction))
                .ok_or(ParseError::UnsupportedOperation(
                    "ORDER BY position must be a positive integer.",
                ));
        }
        order_item(statement, expression, order_direction, null_order_direction)
            .ok_or_else(|| lexer.syntax_error())
    }
}
