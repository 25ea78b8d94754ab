//! Bundles of clause parsers configured for one dialect.
//!
//! A statement parser holds one facade and calls its clause parsers in a
//! fixed order.

use crate::dialect::Dialect;

use super::clause::{
    DistinctClauseParser, GroupByClauseParser, HavingClauseParser, InsertColumnsClauseParser,
    InsertDuplicateKeyUpdateClauseParser, InsertIntoClauseParser, InsertSetClauseParser,
    InsertValuesClauseParser, LimitClauseParser, OrderByClauseParser, SelectListClauseParser,
    SelectOptionClauseParser, SelectRestClauseParser, TableReferencesClauseParser,
    UpdateSetItemsClauseParser, WhereClauseParser,
};

/// Clause parsers of a `SELECT`.
#[derive(Debug, Clone, Copy)]
pub struct SelectClauseParserFacade {
    /// `DISTINCT` and its synonyms.
    pub distinct: DistinctClauseParser,
    /// Options between `SELECT` and the select list.
    pub select_option: SelectOptionClauseParser,
    /// The select list.
    pub select_list: SelectListClauseParser,
    /// The `FROM` table references.
    pub table_references: TableReferencesClauseParser,
    /// `WHERE`.
    pub where_clause: WhereClauseParser,
    /// `GROUP BY`.
    pub group_by: GroupByClauseParser,
    /// `HAVING`.
    pub having: HavingClauseParser,
    /// `ORDER BY`.
    pub order_by: OrderByClauseParser,
    /// `LIMIT`.
    pub limit: LimitClauseParser,
    /// Anything following a complete select.
    pub select_rest: SelectRestClauseParser,
}

impl SelectClauseParserFacade {
    /// Builds the facade for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            distinct: DistinctClauseParser::new(dialect),
            select_option: SelectOptionClauseParser::new(dialect),
            select_list: SelectListClauseParser::new(dialect),
            table_references: TableReferencesClauseParser::new(dialect),
            where_clause: WhereClauseParser::new(dialect),
            group_by: GroupByClauseParser::new(dialect),
            having: HavingClauseParser,
            order_by: OrderByClauseParser::new(dialect),
            limit: LimitClauseParser,
            select_rest: SelectRestClauseParser::new(dialect),
        }
    }
}

/// Clause parsers of an `INSERT`.
#[derive(Debug, Clone, Copy)]
pub struct InsertClauseParserFacade {
    /// `INTO table`.
    pub insert_into: InsertIntoClauseParser,
    /// The column list.
    pub insert_columns: InsertColumnsClauseParser,
    /// `VALUES` rows.
    pub insert_values: InsertValuesClauseParser,
    /// The `SET` form.
    pub insert_set: InsertSetClauseParser,
    /// `ON DUPLICATE KEY UPDATE`.
    pub insert_duplicate_key_update: InsertDuplicateKeyUpdateClauseParser,
}

impl InsertClauseParserFacade {
    /// Builds the facade for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            insert_into: InsertIntoClauseParser::new(dialect),
            insert_columns: InsertColumnsClauseParser,
            insert_values: InsertValuesClauseParser::new(dialect),
            insert_set: InsertSetClauseParser::new(dialect),
            insert_duplicate_key_update: InsertDuplicateKeyUpdateClauseParser::new(dialect),
        }
    }
}

/// Clause parsers of an `UPDATE`.
#[derive(Debug, Clone, Copy)]
pub struct UpdateClauseParserFacade {
    /// The updated table.
    pub table_references: TableReferencesClauseParser,
    /// `SET` assignments.
    pub update_set_items: UpdateSetItemsClauseParser,
    /// `WHERE`.
    pub where_clause: WhereClauseParser,
}

impl UpdateClauseParserFacade {
    /// Builds the facade for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            table_references: TableReferencesClauseParser::new(dialect),
            update_set_items: UpdateSetItemsClauseParser,
            where_clause: WhereClauseParser::new(dialect),
        }
    }
}

/// Clause parsers of a `DELETE`.
#[derive(Debug, Clone, Copy)]
pub struct DeleteClauseParserFacade {
    /// The table deleted from.
    pub table_references: TableReferencesClauseParser,
    /// `WHERE`.
    pub where_clause: WhereClauseParser,
}

impl DeleteClauseParserFacade {
    /// Builds the facade for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            table_references: TableReferencesClauseParser::new(dialect),
            where_clause: WhereClauseParser::new(dialect),
        }
    }
}
