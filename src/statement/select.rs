//! `SELECT` statement model.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use super::SqlStatement;
use super::limit::Limit;

/// Aggregation functions the result merger understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AggregationType {
    /// `MAX`
    Max,
    /// `MIN`
    Min,
    /// `SUM`
    Sum,
    /// `COUNT`
    Count,
    /// `AVG`
    Avg,
}

impl AggregationType {
    /// The function name in upper case.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AggregationType::Max => "MAX",
            AggregationType::Min => "MIN",
            AggregationType::Sum => "SUM",
            AggregationType::Count => "COUNT",
            AggregationType::Avg => "AVG",
        }
    }
}

impl Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An aggregation in the select list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregationSelectItem {
    /// The aggregation function.
    pub aggregation_type: AggregationType,
    /// The parenthesized argument, for example `(DISTINCT user_id)`.
    pub inner_expression: String,
    /// Alias, if one was given.
    pub alias: Option<String>,
    /// Items derived to compute this one across shards.
    pub derived: Vec<AggregationSelectItem>,
}

impl AggregationSelectItem {
    /// Creates an aggregation without alias or derived items.
    #[must_use]
    pub fn new(aggregation_type: AggregationType, inner_expression: impl Into<String>) -> Self {
        Self {
            aggregation_type,
            inner_expression: inner_expression.into(),
            alias: None,
            derived: Vec::new(),
        }
    }

    /// The aggregation as written, for example `COUNT(*)`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{}{}", self.aggregation_type, self.inner_expression)
    }

    /// The alias when present, otherwise the expression.
    #[must_use]
    pub fn column_label(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.expression())
    }
}

/// An item of the select list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectItem {
    /// `*` or `owner.*`.
    Star {
        /// The qualifier of `owner.*`.
        owner: Option<String>,
    },
    /// An aggregation function call.
    Aggregation(AggregationSelectItem),
    /// Any other expression.
    Common {
        /// The expression as written.
        expression: String,
        /// Alias, if one was given.
        alias: Option<String>,
    },
}

impl SelectItem {
    /// The item as written, without its alias.
    #[must_use]
    pub fn expression(&self) -> String {
        match self {
            SelectItem::Star { owner: Some(owner) } => format!("{owner}.*"),
            SelectItem::Star { owner: None } => String::from("*"),
            SelectItem::Aggregation(item) => item.expression(),
            SelectItem::Common { expression, .. } => expression.clone(),
        }
    }

    /// The item alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        match self {
            SelectItem::Star { .. } => None,
            SelectItem::Aggregation(item) => item.alias.as_deref(),
            SelectItem::Common { alias, .. } => alias.as_deref(),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

/// An `ORDER BY` or `GROUP BY` item.
///
/// Exactly one of `name` and `index` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderItem {
    /// Qualifier of `owner.name`.
    pub owner: Option<String>,
    /// Column or alias name.
    pub name: Option<String>,
    /// One-based select list position for `ORDER BY 2`.
    pub index: Option<usize>,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Where nulls sort.
    pub null_order_direction: OrderDirection,
    /// Alias of the matching select item, possibly derived.
    pub alias: Option<String>,
}

impl OrderItem {
    /// An item naming a column.
    #[must_use]
    pub fn named(
        owner: Option<String>,
        name: impl Into<String>,
        order_direction: OrderDirection,
        null_order_direction: OrderDirection,
    ) -> Self {
        Self {
            owner,
            name: Some(name.into()),
            index: None,
            order_direction,
            null_order_direction,
            alias: None,
        }
    }

    /// An item naming a select list position.
    #[must_use]
    pub fn indexed(
        index: usize,
        order_direction: OrderDirection,
        null_order_direction: OrderDirection,
    ) -> Self {
        Self {
            owner: None,
            name: None,
            index: Some(index),
            order_direction,
            null_order_direction,
            alias: None,
        }
    }

    /// `owner.name` or `name`, `None` for index items.
    #[must_use]
    pub fn qualified_name(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        Some(match &self.owner {
            Some(owner) => format!("{owner}.{name}"),
            None => String::from(name),
        })
    }
}

/// A parsed `SELECT`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectStatement {
    pub(crate) base: SqlStatement,
    /// Whether the select list contains `*` or `owner.*`.
    pub contains_star: bool,
    /// Offset just past the last select item.
    pub select_list_last_position: usize,
    /// Offset just past the `GROUP BY` clause.
    pub group_by_last_position: usize,
    /// The select list, including derived items.
    pub items: Vec<SelectItem>,
    /// `GROUP BY` items.
    pub group_by_items: Vec<OrderItem>,
    /// `ORDER BY` items, or a copy of the `GROUP BY` items when absent.
    pub order_by_items: Vec<OrderItem>,
    /// Pagination.
    pub limit: Option<Limit>,
}

impl SelectStatement {
    /// The alias of the select item written as `expression`, ignoring ASCII
    /// case.
    #[must_use]
    pub fn alias_of(&self, expression: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.expression().eq_ignore_ascii_case(expression))
            .and_then(SelectItem::alias)
    }

    /// Aggregation items of the select list.
    pub fn aggregation_items(&self) -> impl Iterator<Item = &AggregationSelectItem> {
        self.items.iter().filter_map(|item| match item {
            SelectItem::Aggregation(aggregation) => Some(aggregation),
            _ => None,
        })
    }

    /// Whether the group and order items name the same columns in order.
    #[must_use]
    pub fn is_same_group_by_and_order_by(&self) -> bool {
        !self.group_by_items.is_empty()
            && self.group_by_items.len() == self.order_by_items.len()
            && self
                .group_by_items
                .iter()
                .zip(&self.order_by_items)
                .all(|(group, order)| {
                    group.qualified_name() == order.qualified_name() && group.index == order.index
                })
    }
}

impl AsRef<SqlStatement> for SelectStatement {
    fn as_ref(&self) -> &SqlStatement {
        &self.base
    }
}

impl AsMut<SqlStatement> for SelectStatement {
    fn as_mut(&mut self) -> &mut SqlStatement {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_alias_of_matches_expression() {
        let statement = SelectStatement {
            items: vec![
                SelectItem::Common {
                    expression: "o.user_id".into(),
                    alias: Some("uid".into()),
                },
                SelectItem::Aggregation(AggregationSelectItem {
                    alias: Some("c".into()),
                    ..AggregationSelectItem::new(AggregationType::Count, "(*)")
                }),
            ],
            ..SelectStatement::default()
        };
        assert_eq!(statement.alias_of("O.USER_ID"), Some("uid"));
        assert_eq!(statement.alias_of("count(*)"), Some("c"));
        assert_eq!(statement.alias_of("status"), None);
        assert_eq!(statement.aggregation_items().count(), 1);
    }

    #[test]
    fn test_same_group_by_and_order_by() {
        let item = OrderItem::named(None, "user_id", OrderDirection::Asc, OrderDirection::Asc);
        let mut statement = SelectStatement {
            group_by_items: vec![item.clone()],
            order_by_items: vec![item],
            ..SelectStatement::default()
        };
        assert!(statement.is_same_group_by_and_order_by());
        statement.order_by_items[0].name = Some("status".into());
        assert!(!statement.is_same_group_by_and_order_by());
    }
}
