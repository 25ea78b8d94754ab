//! Rewrite tokens marking spans of the original SQL text.

use alloc::string::String;
use alloc::vec::Vec;

/// A marker recording where a later rewrite pass may substitute text.
///
/// Every variant carries the offset of the first character it covers in the
/// original SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SqlToken {
    /// A logical table name to be replaced by an actual table name.
    Table {
        /// Offset of the first character of the name.
        begin_position: usize,
        /// The name as written, including quotes.
        original_literals: String,
    },
    /// Select items to be appended at this position.
    Items {
        /// Offset at which the items are inserted.
        begin_position: usize,
        /// Rendered items, for example `COUNT(x) AS AVG_DERIVED_COUNT_0`.
        items: Vec<String>,
    },
    /// An `ORDER BY` clause to be derived from the `GROUP BY` items.
    OrderBy {
        /// Offset at which the clause is inserted.
        begin_position: usize,
    },
    /// The `VALUES` list of an insert, which may be regenerated per shard.
    InsertValues {
        /// Offset of the values list.
        begin_position: usize,
        /// Logical table inserted into.
        table_name: String,
    },
    /// A literal `LIMIT` offset.
    Offset {
        /// Offset of the first digit of the literal.
        begin_position: usize,
        /// The literal value.
        offset: i64,
    },
    /// A literal `LIMIT` row count.
    RowCount {
        /// Offset of the first digit of the literal.
        begin_position: usize,
        /// The literal value.
        row_count: i64,
    },
}

impl SqlToken {
    /// Offset of the first character covered by the token.
    #[must_use]
    pub fn begin_position(&self) -> usize {
        match self {
            SqlToken::Table { begin_position, .. }
            | SqlToken::Items { begin_position, .. }
            | SqlToken::OrderBy { begin_position }
            | SqlToken::InsertValues { begin_position, .. }
            | SqlToken::Offset { begin_position, .. }
            | SqlToken::RowCount { begin_position, .. } => *begin_position,
        }
    }
}
