//! `INSERT` statement model.

use alloc::string::String;
use alloc::vec::Vec;

use super::SqlStatement;
use super::condition::{Column, Conditions};
use crate::lexer::Keyword;

/// One row of an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InsertValue {
    /// `VALUES`, a dialect synonym, or `SET`.
    pub keyword: Keyword,
    /// The row as written, for example `(?, 'a', 1)`.
    pub expression: String,
    /// Number of placeholders in the row.
    pub parameters_count: usize,
}

/// A parsed `INSERT`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InsertStatement {
    base: SqlStatement,
    /// Target columns, in the order they were listed.
    pub columns: Vec<Column>,
    /// Inserted rows.
    pub insert_values: Vec<InsertValue>,
    /// Sharding conditions of each row. The statement's own conditions hold
    /// those of the first row.
    pub row_conditions: Vec<Conditions>,
    /// Offset of the `)` closing the column list.
    pub columns_list_last_position: Option<usize>,
    /// Offset just past the last values row.
    pub values_list_last_position: Option<usize>,
    /// Columns assigned by `ON DUPLICATE KEY UPDATE`.
    pub duplicate_key_update_columns: Vec<Column>,
}

impl InsertStatement {
    /// The table inserted into.
    #[must_use]
    pub fn table_name(&self) -> Option<&str> {
        self.base.tables().single_table_name()
    }
}

impl AsRef<SqlStatement> for InsertStatement {
    fn as_ref(&self) -> &SqlStatement {
        &self.base
    }
}

impl AsMut<SqlStatement> for InsertStatement {
    fn as_mut(&mut self) -> &mut SqlStatement {
        &mut self.base
    }
}
