use alloc::format;
use alloc::string::String;

use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::parser::expression::BasicExpressionParser;
use crate::statement::{OrderDirection, OrderItem, SelectStatement, SqlExpression};

/// Parses `GROUP BY` items and records where the clause ends.
#[derive(Debug, Clone, Copy)]
pub struct GroupByClauseParser {
    dialect: &'static Dialect,
}

impl GroupByClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the clause if the current token is `GROUP`.
    ///
    /// # Errors
    ///
    /// Returns an error if `BY` is missing or an item is malformed.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SelectStatement,
    ) -> Result<(), ParseError> {
        if !lexer.skip_if_keyword(&[Keyword::Group])? {
            return Ok(());
        }
        lexer.accept(Keyword::By)?;
        loop {
            if lexer.is_end() {
                return Err(lexer.syntax_error());
            }
            let expression = BasicExpressionParser.parse(lexer, statement.as_mut())?;
            let order_direction = parse_order_direction(lexer)?;
            if let Some(item) = order_item(
                statement,
                expression,
                order_direction,
                self.dialect.null_order_direction,
            ) {
                statement.group_by_items.push(item);
            }
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }
        lexer.skip_all(self.dialect.skipped_after_group_by)?;
        statement.group_by_last_position = lexer.current().begin_position();
        Ok(())
    }
}

/// Consumes an optional `ASC` or `DESC`.
pub(super) fn parse_order_direction(
    lexer: &mut LexerEngine<'_>,
) -> Result<OrderDirection, ParseError> {
    if lexer.skip_if_keyword(&[Keyword::Desc])? {
        return Ok(OrderDirection::Desc);
    }
    lexer.skip_if_keyword(&[Keyword::Asc])?;
    Ok(OrderDirection::Asc)
}

/// Builds an item naming a column or expression, picking up the alias of a
/// matching select item. Returns `None` for literals and placeholders.
pub(super) fn order_item(
    statement: &SelectStatement,
    expression: SqlExpression,
    order_direction: OrderDirection,
    null_order_direction: OrderDirection,
) -> Option<OrderItem> {
    let (owner, name) = match expression {
        SqlExpression::Property { owner, name } => (Some(owner), name),
        SqlExpression::Identifier(name) | SqlExpression::Ignore(name) => (None, name),
        _ => return None,
    };
    let qualified_name = match &owner {
        Some(owner) => format!("{owner}.{name}"),
        None => name.clone(),
    };
    let alias = select_item_alias(statement, &qualified_name);
    let mut item = OrderItem::named(owner, name, order_direction, null_order_direction);
    item.alias = alias;
    Some(item)
}

/// The alias under which `name` appears in the select list: the alias of
/// an item written as `name`, or `name` itself when it is an item alias.
fn select_item_alias(statement: &SelectStatement, name: &str) -> Option<String> {
    if statement.contains_star {
        return None;
    }
    statement.items.iter().find_map(|item| {
        if item.expression().eq_ignore_ascii_case(name) {
            Some(item.alias().map(String::from))
        } else if item.alias().is_some_and(|alias| alias.eq_ignore_ascii_case(name)) {
            Some(Some(String::from(name)))
        } else {
            None
        }
    })?
}
