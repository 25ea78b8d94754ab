use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::exact_value;
use super::facade::SelectClauseParserFacade;
use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine};
use crate::statement::{
    AggregationSelectItem, AggregationType, OrderItem, SelectItem, SelectStatement, SqlToken,
};

const DERIVED_COUNT_ALIAS: &str = "AVG_DERIVED_COUNT_";
const DERIVED_SUM_ALIAS: &str = "AVG_DERIVED_SUM_";
const ORDER_BY_DERIVED_ALIAS: &str = "ORDER_BY_DERIVED_";
const GROUP_BY_DERIVED_ALIAS: &str = "GROUP_BY_DERIVED_";

/// Parses `SELECT` statements.
///
/// Besides the clauses themselves, the parser derives what a result merger
/// needs to combine shard results: `COUNT` and `SUM` columns for every
/// `AVG`, select items for order and group columns missing from the select
/// list, and an `ORDER BY` mirroring a lone `GROUP BY`.
#[derive(Debug, Clone, Copy)]
pub struct SelectParser {
    facade: SelectClauseParserFacade,
}

impl SelectParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            facade: SelectClauseParserFacade::new(dialect),
        }
    }

    /// Parses the statement starting at the `SELECT` keyword.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a clause parser.
    pub fn parse(&self, lexer: &mut LexerEngine<'_>) -> Result<SelectStatement, ParseError> {
        let facade = &self.facade;
        let mut statement = SelectStatement::default();
        lexer.accept(Keyword::Select)?;
        facade.distinct.parse(lexer)?;
        facade.select_option.parse(lexer)?;
        let owner_tokens = facade.select_list.parse(lexer, &mut statement)?;
        self.parse_from(lexer, &mut statement)?;
        keep_table_owner_tokens(&mut statement, owner_tokens);
        facade.where_clause.parse(lexer, statement.as_mut())?;
        facade.group_by.parse(lexer, &mut statement)?;
        facade.having.parse(lexer)?;
        facade.order_by.parse(lexer, &mut statement)?;
        facade.limit.parse(lexer, &mut statement)?;
        facade.select_rest.parse(lexer)?;
        lexer.skip_rest(statement.as_mut())?;

        append_derived_columns(&mut statement);
        append_derived_order_by(&mut statement);
        Ok(statement)
    }

    fn parse_from(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SelectStatement,
    ) -> Result<(), ParseError> {
        lexer.unsupported_if_equal(&[Keyword::Into])?;
        if lexer.skip_if_keyword(&[Keyword::From])? {
            self.facade
                .table_references
                .parse(lexer, statement.as_mut(), false)?;
        }
        Ok(())
    }
}

/// Keeps the select list qualifiers that name a table of the statement.
fn keep_table_owner_tokens(statement: &mut SelectStatement, owner_tokens: Vec<SqlToken>) {
    for token in owner_tokens {
        let is_table_name = matches!(
            &token,
            SqlToken::Table { original_literals, .. }
                if statement.as_ref().tables().contains_name(&exact_value(original_literals))
        );
        if is_table_name {
            statement.as_mut().add_sql_token(token);
        }
    }
}

fn append_derived_columns(statement: &mut SelectStatement) {
    let mut items = Vec::new();
    append_avg_derived_columns(statement, &mut items);
    let contains_star = statement.contains_star;
    append_derived_order_columns(
        &statement.items,
        contains_star,
        &mut statement.order_by_items,
        ORDER_BY_DERIVED_ALIAS,
        &mut items,
    );
    append_derived_order_columns(
        &statement.items,
        contains_star,
        &mut statement.group_by_items,
        GROUP_BY_DERIVED_ALIAS,
        &mut items,
    );
    if !items.is_empty() {
        let begin_position = statement.select_list_last_position;
        statement
            .as_mut()
            .add_sql_token(SqlToken::Items { begin_position, items });
    }
}

fn append_avg_derived_columns(statement: &mut SelectStatement, items: &mut Vec<String>) {
    let avg_items = statement.items.iter_mut().filter_map(|item| match item {
        SelectItem::Aggregation(item) if item.aggregation_type == AggregationType::Avg => {
            Some(item)
        }
        _ => None,
    });
    for (offset, avg) in avg_items.enumerate() {
        for (aggregation_type, alias_prefix) in [
            (AggregationType::Count, DERIVED_COUNT_ALIAS),
            (AggregationType::Sum, DERIVED_SUM_ALIAS),
        ] {
            let alias = format!("{alias_prefix}{offset}");
            let mut derived =
                AggregationSelectItem::new(aggregation_type, avg.inner_expression.clone());
            items.push(format!("{} AS {alias}", derived.expression()));
            derived.alias = Some(alias);
            avg.derived.push(derived);
        }
    }
}

fn append_derived_order_columns(
    select_items: &[SelectItem],
    contains_star: bool,
    order_items: &mut [OrderItem],
    alias_prefix: &str,
    items: &mut Vec<String>,
) {
    let mut offset = 0;
    for order_item in order_items {
        if contains_star || is_in_select_list(select_items, order_item) {
            continue;
        }
        let Some(qualified_name) = order_item.qualified_name() else {
            continue;
        };
        let alias = format!("{alias_prefix}{offset}");
        offset += 1;
        items.push(format!("{qualified_name} AS {alias}"));
        order_item.alias = Some(alias);
    }
}

fn is_in_select_list(select_items: &[SelectItem], order_item: &OrderItem) -> bool {
    if order_item.index.is_some() {
        return true;
    }
    let qualified_name = order_item.qualified_name();
    select_items.iter().any(|item| match (item.alias(), &order_item.alias) {
        (Some(alias), Some(order_alias)) => alias.eq_ignore_ascii_case(order_alias),
        (None, _) => qualified_name
            .as_deref()
            .is_some_and(|name| item.expression().eq_ignore_ascii_case(name)),
        (Some(_), None) => false,
    })
}

/// Orders by the group items when only `GROUP BY` was written, so shard
/// results arrive sorted for merging.
fn append_derived_order_by(statement: &mut SelectStatement) {
    if statement.group_by_items.is_empty() || !statement.order_by_items.is_empty() {
        return;
    }
    statement.order_by_items = statement.group_by_items.clone();
    let begin_position = statement.group_by_last_position;
    statement
        .as_mut()
        .add_sql_token(SqlToken::OrderBy { begin_position });
}
