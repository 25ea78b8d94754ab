//! Clause parsers.
//!
//! Each parser handles one clause of one or more statement kinds. Parsers
//! that have a dialect hook hold the [`Dialect`](crate::dialect::Dialect)
//! they were built for and consult it at the points where dialects differ;
//! an empty hook list leaves only the standard grammar.

mod distinct;
mod group_by;
mod having;
mod insert_columns;
mod insert_duplicate_key_update;
mod insert_into;
mod insert_set;
mod insert_values;
mod limit;
mod order_by;
mod select_list;
mod select_option;
mod select_rest;
mod table_references;
mod update_set_items;
mod where_clause;

pub use distinct::DistinctClauseParser;
pub use group_by::GroupByClauseParser;
pub use having::HavingClauseParser;
pub use insert_columns::InsertColumnsClauseParser;
pub use insert_duplicate_key_update::InsertDuplicateKeyUpdateClauseParser;
pub use insert_into::InsertIntoClauseParser;
pub use insert_set::InsertSetClauseParser;
pub use insert_values::InsertValuesClauseParser;
pub use limit::LimitClauseParser;
pub use order_by::OrderByClauseParser;
pub use select_list::SelectListClauseParser;
pub use select_option::SelectOptionClauseParser;
pub use select_rest::SelectRestClauseParser;
pub use table_references::TableReferencesClauseParser;
pub use update_set_items::UpdateSetItemsClauseParser;
pub use where_clause::WhereClauseParser;

pub(crate) use where_clause::find_column;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::dialect::{DatabaseType, Dialect};
    use crate::lexer::{Dictionary, LexerEngine};

    /// Runs `f` on a lexer positioned at the start of `sql`.
    pub(crate) fn with_lexer<R>(
        sql: &str,
        dialect: &'static Dialect,
        f: impl FnOnce(&mut LexerEngine<'_>) -> R,
    ) -> R {
        let dictionary = Dictionary::new(dialect);
        let mut lexer = LexerEngine::new(sql, &dictionary, DatabaseType::MySql, dialect).unwrap();
        f(&mut lexer)
    }
}
