//! Tables referenced by a statement.

use alloc::string::String;

use indexmap::IndexMap as IndexMapRaw;

/// `IndexMap` alias using hashbrown's default hasher for `no_std` compatibility.
type IndexMap<K, V> = IndexMapRaw<K, V, hashbrown::DefaultHashBuilder>;

/// A table reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    /// Table name without quotes.
    pub name: String,
    /// Alias, if one was given.
    pub alias: Option<String>,
}

impl Table {
    /// Creates a table reference.
    #[must_use]
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
        }
    }
}

/// Ordered set of the tables a statement references.
///
/// Tables keep the order in which they first appear; a table referenced
/// twice (compared case-insensitively) is only kept once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tables {
    tables: IndexMap<String, Table>,
}

impl Tables {
    /// Adds a table unless a table of the same name is already present.
    pub fn add(&mut self, table: Table) {
        self.tables
            .entry(table.name.to_ascii_lowercase())
            .or_insert(table);
    }

    /// Number of distinct tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table was referenced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterates over the tables in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Iterates over the table names in order of appearance.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.values().map(|table| table.name.as_str())
    }

    /// The name of the first table, which is the only one for single-table
    /// statements.
    #[must_use]
    pub fn single_table_name(&self) -> Option<&str> {
        self.tables.first().map(|(_, table)| table.name.as_str())
    }

    /// Whether a table with this name (not alias) is present.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.tables.contains_key(name.to_ascii_lowercase().as_str())
    }

    /// Finds a table by name or alias, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name_or_alias: &str) -> Option<&Table> {
        self.tables
            .get(name_or_alias.to_ascii_lowercase().as_str())
            .or_else(|| {
                self.iter().find(|table| {
                    table
                        .alias
                        .as_deref()
                        .is_some_and(|alias| alias.eq_ignore_ascii_case(name_or_alias))
                })
            })
    }
}

impl<'a> IntoIterator for &'a Tables {
    type Item = &'a Table;
    type IntoIter = indexmap::map::Values<'a, String, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.values()
    }
}
