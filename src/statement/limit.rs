//! Pagination captured from `LIMIT` clauses.

use crate::dialect::DatabaseType;

/// Where a limit value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LimitSource {
    /// A literal written in the SQL.
    Literal(i64),
    /// A `?` placeholder, by zero-based parameter index.
    Parameter(usize),
}

/// One slot of a `LIMIT` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LimitValue {
    /// The literal or placeholder filling the slot.
    pub source: LimitSource,
    /// Whether this is the offset slot rather than the row count.
    pub is_offset: bool,
}

impl LimitValue {
    /// A literal slot.
    #[must_use]
    pub fn literal(value: i64, is_offset: bool) -> Self {
        Self {
            source: LimitSource::Literal(value),
            is_offset,
        }
    }

    /// A placeholder slot.
    #[must_use]
    pub fn parameter(index: usize, is_offset: bool) -> Self {
        Self {
            source: LimitSource::Parameter(index),
            is_offset,
        }
    }

    /// The literal value, if the slot is a literal.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        match self.source {
            LimitSource::Literal(value) => Some(value),
            LimitSource::Parameter(_) => None,
        }
    }

    /// The parameter index, if the slot is a placeholder.
    #[must_use]
    pub fn parameter_index(&self) -> Option<usize> {
        match self.source {
            LimitSource::Literal(_) => None,
            LimitSource::Parameter(index) => Some(index),
        }
    }

    /// The effective value given the bound statement parameters.
    ///
    /// Returns `None` when the slot is a placeholder past the end of
    /// `parameters`.
    #[must_use]
    pub fn resolve(&self, parameters: &[i64]) -> Option<i64> {
        match self.source {
            LimitSource::Literal(value) => Some(value),
            LimitSource::Parameter(index) => parameters.get(index).copied(),
        }
    }
}

/// A parsed `LIMIT` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Limit {
    /// Database type the clause was parsed for.
    pub database_type: DatabaseType,
    /// Rows to skip.
    pub offset: Option<LimitValue>,
    /// Rows to return.
    pub row_count: Option<LimitValue>,
}

impl Limit {
    /// Creates an empty limit.
    #[must_use]
    pub fn new(database_type: DatabaseType) -> Self {
        Self {
            database_type,
            offset: None,
            row_count: None,
        }
    }

    /// The effective offset, zero when absent.
    #[must_use]
    pub fn offset_value(&self, parameters: &[i64]) -> i64 {
        self.offset
            .and_then(|offset| offset.resolve(parameters))
            .unwrap_or(0)
    }

    /// The effective row count, `None` when absent or unbound.
    #[must_use]
    pub fn row_count_value(&self, parameters: &[i64]) -> Option<i64> {
        self.row_count
            .and_then(|row_count| row_count.resolve(parameters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_parameter_are_exclusive() {
        let literal = LimitValue::literal(10, false);
        assert_eq!(literal.value(), Some(10));
        assert_eq!(literal.parameter_index(), None);

        let parameter = LimitValue::parameter(2, true);
        assert_eq!(parameter.value(), None);
        assert_eq!(parameter.parameter_index(), Some(2));
        assert!(parameter.is_offset);
    }

    #[test]
    fn test_resolve_against_parameters() {
        let limit = Limit {
            database_type: DatabaseType::MySql,
            offset: Some(LimitValue::parameter(1, true)),
            row_count: Some(LimitValue::literal(20, false)),
        };
        assert_eq!(limit.offset_value(&[7, 40]), 40);
        assert_eq!(limit.offset_value(&[7]), 0);
        assert_eq!(limit.row_count_value(&[]), Some(20));
        assert_eq!(Limit::new(DatabaseType::H2).row_count_value(&[]), None);
    }
}
