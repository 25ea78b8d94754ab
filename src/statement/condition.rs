//! Sharding conditions extracted from `WHERE` clauses and insert values.

use alloc::string::String;
use alloc::vec::Vec;

use indexmap::IndexMap as IndexMapRaw;

use super::expression::SqlExpression;

/// `IndexMap` alias using hashbrown's default hasher for `no_std` compatibility.
type IndexMap<K, V> = IndexMapRaw<K, V, hashbrown::DefaultHashBuilder>;

/// A column, qualified by the table it belongs to when that is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Owning table name, resolved from aliases.
    pub table_name: Option<String>,
}

impl Column {
    /// Creates a column reference.
    #[must_use]
    pub fn new(name: impl Into<String>, table_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            table_name,
        }
    }
}

/// Comparison used by a sharding condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShardingOperator {
    /// `=`
    Equal,
    /// `IN (...)`
    In,
    /// `BETWEEN .. AND ..`
    Between,
}

/// A column compared against literal or placeholder values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Condition {
    /// The compared column.
    pub column: Column,
    /// The comparison.
    pub operator: ShardingOperator,
    /// The compared values, in source order.
    pub values: Vec<SqlExpression>,
}

/// Conditions keyed by column.
///
/// A later condition on the same column replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Conditions {
    conditions: IndexMap<Column, Condition>,
}

impl Conditions {
    /// Records a condition.
    pub fn add(&mut self, condition: Condition) {
        self.conditions.insert(condition.column.clone(), condition);
    }

    /// The condition on `column`, if any.
    #[must_use]
    pub fn get(&self, column: &Column) -> Option<&Condition> {
        self.conditions.get(column)
    }

    /// The condition on `table.column`, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, table_name: &str, column_name: &str) -> Option<&Condition> {
        self.iter().find(|condition| {
            condition.column.name.eq_ignore_ascii_case(column_name)
                && condition
                    .column
                    .table_name
                    .as_deref()
                    .is_some_and(|table| table.eq_ignore_ascii_case(table_name))
        })
    }

    /// Iterates over the conditions in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.values()
    }

    /// Number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether no condition was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_later_condition_replaces_earlier() {
        let column = Column::new("order_id", Some("t_order".into()));
        let mut conditions = Conditions::default();
        conditions.add(Condition {
            column: column.clone(),
            operator: ShardingOperator::Equal,
            values: vec![SqlExpression::Placeholder(0)],
        });
        conditions.add(Condition {
            column: column.clone(),
            operator: ShardingOperator::In,
            values: vec![SqlExpression::Placeholder(1), SqlExpression::Placeholder(2)],
        });
        assert_eq!(conditions.len(), 1);
        let condition = conditions.find("T_ORDER", "ORDER_ID").unwrap();
        assert_eq!(condition.operator, ShardingOperator::In);
        assert_eq!(conditions.get(&column), Some(condition));
    }
}
