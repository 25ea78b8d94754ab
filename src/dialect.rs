//! Dialect customization hooks.
//!
//! A [`Dialect`] is pure data: lists of keywords that the generic clause
//! parsers consult at the points where SQL dialects diverge, plus a few
//! lexer switches. An empty list means "grammar only"; adding keywords only
//! widens what is accepted.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::lexer::Keyword;
use crate::statement::OrderDirection;

/// Keyword lists and switches describing one SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    /// Human readable dialect name.
    pub name: &'static str,
    /// Keywords recognized in addition to [`Keyword::DEFAULT`].
    pub keywords: &'static [Keyword],

    /// Synonyms of `DISTINCT`.
    pub distinct_synonyms: &'static [Keyword],
    /// Select options skipped between `SELECT` and the select list.
    pub select_options: &'static [Keyword],
    /// Join keywords accepted in addition to the standard join types.
    pub join_type_keywords: &'static [Keyword],
    /// Keywords introducing a skipped partition list after a table name.
    pub table_partition_keywords: &'static [Keyword],
    /// Keywords introducing a skipped index hint after a table name.
    pub index_hint_keywords: &'static [Keyword],
    /// Keywords usable as a select item alias without `AS`.
    pub select_item_alias_keywords: &'static [Keyword],
    /// Keywords usable as a table alias without `AS`.
    pub table_alias_keywords: &'static [Keyword],
    /// Extra comparison operators accepted in `WHERE`.
    pub condition_operators: &'static [Keyword],
    /// Keywords skipped after the `GROUP BY` item list.
    pub skipped_after_group_by: &'static [Keyword],
    /// Null ordering applied to `ORDER BY` items.
    pub null_order_direction: OrderDirection,
    /// Keywords rejected after a complete `SELECT`.
    pub unsupported_select_rest: &'static [Keyword],

    /// Modifiers skipped between `INSERT` and `INTO`.
    pub skipped_before_into: &'static [Keyword],
    /// Keywords skipped between the insert table and its values.
    pub skipped_between_table_and_values: &'static [Keyword],
    /// Synonyms of `VALUES`.
    pub values_synonyms: &'static [Keyword],
    /// Keywords introducing the `INSERT ... SET` form.
    pub insert_set_keywords: &'static [Keyword],
    /// Keywords introducing `ON DUPLICATE KEY UPDATE`.
    pub duplicate_key_update_keywords: &'static [Keyword],

    /// Modifiers skipped between `UPDATE` and the table.
    pub skipped_between_update_and_table: &'static [Keyword],
    /// Modifiers skipped between `DELETE` and the table.
    pub skipped_between_delete_and_table: &'static [Keyword],

    /// Whether `#` starts a line comment.
    pub hash_comments: bool,
    /// Whether backticks quote identifiers.
    pub backtick_identifiers: bool,
    /// Whether double quotes delimit strings rather than identifiers.
    pub double_quoted_strings: bool,
    /// Whether a backslash escapes the next character inside strings.
    pub backslash_escapes: bool,
    /// Whether `@name` and `@@name` are variables.
    pub variables: bool,
}

impl Dialect {
    /// The grammar skeleton with every hook empty.
    pub const STANDARD: Dialect = Dialect {
        name: "Standard",
        keywords: &[],
        distinct_synonyms: &[],
        select_options: &[],
        join_type_keywords: &[],
        table_partition_keywords: &[],
        index_hint_keywords: &[],
        select_item_alias_keywords: &[],
        table_alias_keywords: &[],
        condition_operators: &[],
        skipped_after_group_by: &[],
        null_order_direction: OrderDirection::Asc,
        unsupported_select_rest: &[],
        skipped_before_into: &[],
        skipped_between_table_and_values: &[],
        values_synonyms: &[],
        insert_set_keywords: &[],
        duplicate_key_update_keywords: &[],
        skipped_between_update_and_table: &[],
        skipped_between_delete_and_table: &[],
        hash_comments: false,
        backtick_identifiers: false,
        double_quoted_strings: false,
        backslash_escapes: false,
        variables: false,
    };

    /// MySQL.
    pub const MYSQL: Dialect = Dialect {
        name: "MySQL",
        keywords: &[
            Keyword::LowPriority,
            Keyword::HighPriority,
            Keyword::Delayed,
            Keyword::Ignore,
            Keyword::Quick,
            Keyword::StraightJoin,
            Keyword::SqlSmallResult,
            Keyword::SqlBigResult,
            Keyword::SqlBufferResult,
            Keyword::SqlCache,
            Keyword::SqlNoCache,
            Keyword::SqlCalcFoundRows,
            Keyword::DistinctRow,
            Keyword::Partition,
            Keyword::Force,
            Keyword::Value,
            Keyword::Duplicate,
            Keyword::Rollup,
            Keyword::Regexp,
            Keyword::Describe,
        ],
        distinct_synonyms: &[Keyword::DistinctRow],
        select_options: &[
            Keyword::HighPriority,
            Keyword::StraightJoin,
            Keyword::SqlSmallResult,
            Keyword::SqlBigResult,
            Keyword::SqlBufferResult,
            Keyword::SqlCache,
            Keyword::SqlNoCache,
            Keyword::SqlCalcFoundRows,
        ],
        join_type_keywords: &[Keyword::StraightJoin],
        table_partition_keywords: &[Keyword::Partition],
        index_hint_keywords: &[Keyword::Use, Keyword::Ignore, Keyword::Force],
        select_item_alias_keywords: &[],
        table_alias_keywords: &[Keyword::Length],
        condition_operators: &[Keyword::Regexp],
        skipped_after_group_by: &[Keyword::With, Keyword::Rollup],
        null_order_direction: OrderDirection::Asc,
        unsupported_select_rest: &[Keyword::Procedure, Keyword::Into],
        skipped_before_into: &[
            Keyword::LowPriority,
            Keyword::Delayed,
            Keyword::HighPriority,
            Keyword::Ignore,
        ],
        skipped_between_table_and_values: &[Keyword::Partition],
        values_synonyms: &[Keyword::Value],
        insert_set_keywords: &[Keyword::Set],
        duplicate_key_update_keywords: &[Keyword::On],
        skipped_between_update_and_table: &[Keyword::LowPriority, Keyword::Ignore],
        skipped_between_delete_and_table: &[
            Keyword::LowPriority,
            Keyword::Quick,
            Keyword::Ignore,
        ],
        hash_comments: true,
        backtick_identifiers: true,
        double_quoted_strings: true,
        backslash_escapes: true,
        variables: true,
    };
}

/// Database type tag selecting the dialect used for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DatabaseType {
    /// MySQL.
    MySql,
    /// H2, parsed with the MySQL dialect.
    H2,
}

impl DatabaseType {
    /// The dialect hooks used for this database type.
    #[must_use]
    pub fn dialect(self) -> &'static Dialect {
        match self {
            DatabaseType::MySql | DatabaseType::H2 => &Dialect::MYSQL,
        }
    }
}

impl Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DatabaseType::MySql => "MySQL",
            DatabaseType::H2 => "H2",
        })
    }
}

/// Error returned when parsing an unknown database type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported database type: {0}")]
pub struct UnknownDatabaseType(pub alloc::string::String);

impl FromStr for DatabaseType {
    type Err = UnknownDatabaseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("mysql") {
            Ok(DatabaseType::MySql)
        } else if s.eq_ignore_ascii_case("h2") {
            Ok(DatabaseType::H2)
        } else {
            Err(UnknownDatabaseType(s.into()))
        }
    }
}
