//! Statement model produced by the parser.
//!
//! Every statement kind embeds a [`SqlStatement`] holding what routing needs
//! regardless of kind: the referenced tables, the sharding conditions, the
//! rewrite tokens and the number of placeholders consumed.

mod condition;
mod expression;
mod insert;
mod limit;
mod select;
mod table;
mod token;

use alloc::vec::Vec;

pub use condition::{Column, Condition, Conditions, ShardingOperator};
pub use expression::{SqlExpression, SqlNumber};
pub use insert::{InsertStatement, InsertValue};
pub use limit::{Limit, LimitSource, LimitValue};
pub use select::{
    AggregationSelectItem, AggregationType, OrderDirection, OrderItem, SelectItem,
    SelectStatement,
};
pub use table::{Table, Tables};
pub use token::SqlToken;

use crate::lexer::Keyword;

/// Fields shared by every statement kind.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SqlStatement {
    tables: Tables,
    conditions: Conditions,
    sql_tokens: Vec<SqlToken>,
    parameters_index: usize,
}

impl SqlStatement {
    /// Tables referenced by the statement.
    #[must_use]
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub(crate) fn tables_mut(&mut self) -> &mut Tables {
        &mut self.tables
    }

    /// Sharding conditions.
    #[must_use]
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    pub(crate) fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }

    /// Rewrite tokens in ascending begin position, except that the `LIMIT`
    /// tokens come last with the offset first.
    #[must_use]
    pub fn sql_tokens(&self) -> &[SqlToken] {
        &self.sql_tokens
    }

    /// Inserts a rewrite token, keeping tokens ordered by begin position.
    ///
    /// Tokens sharing a begin position keep their insertion order.
    pub(crate) fn add_sql_token(&mut self, token: SqlToken) {
        let index = self
            .sql_tokens
            .partition_point(|existing| existing.begin_position() <= token.begin_position());
        self.sql_tokens.insert(index, token);
    }

    /// Appends a rewrite token after every token registered so far.
    pub(crate) fn push_sql_token(&mut self, token: SqlToken) {
        self.sql_tokens.push(token);
    }

    /// Number of `?` placeholders consumed so far.
    #[must_use]
    pub fn parameters_index(&self) -> usize {
        self.parameters_index
    }

    pub(crate) fn increase_parameters_index(&mut self) {
        self.parameters_index += 1;
    }
}

/// A parsed `UPDATE`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateStatement {
    base: SqlStatement,
    /// `SET` assignments in source order.
    pub assignments: Vec<(Column, SqlExpression)>,
}

/// A parsed `DELETE`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteStatement {
    base: SqlStatement,
}

macro_rules! impl_sql_statement_access {
    ($($statement:ty),*) => {
        $(
            impl AsRef<SqlStatement> for $statement {
                fn as_ref(&self) -> &SqlStatement {
                    &self.base
                }
            }

            impl AsMut<SqlStatement> for $statement {
                fn as_mut(&mut self) -> &mut SqlStatement {
                    &mut self.base
                }
            }
        )*
    };
}

impl_sql_statement_access!(UpdateStatement, DeleteStatement);

/// A parsed statement of any supported kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// `SELECT`
    Select(SelectStatement),
    /// `INSERT`
    Insert(InsertStatement),
    /// `UPDATE`
    Update(UpdateStatement),
    /// `DELETE`
    Delete(DeleteStatement),
}

impl Statement {
    /// The leading keyword of the statement.
    #[must_use]
    pub fn keyword(&self) -> Keyword {
        match self {
            Statement::Select(_) => Keyword::Select,
            Statement::Insert(_) => Keyword::Insert,
            Statement::Update(_) => Keyword::Update,
            Statement::Delete(_) => Keyword::Delete,
        }
    }

    /// Tables referenced by the statement.
    #[must_use]
    pub fn tables(&self) -> &Tables {
        self.as_ref().tables()
    }

    /// Sharding conditions.
    #[must_use]
    pub fn conditions(&self) -> &Conditions {
        self.as_ref().conditions()
    }

    /// Rewrite tokens in ascending begin position, except that the `LIMIT`
    /// tokens come last with the offset first.
    #[must_use]
    pub fn sql_tokens(&self) -> &[SqlToken] {
        self.as_ref().sql_tokens()
    }

    /// Number of `?` placeholders in the statement.
    #[must_use]
    pub fn parameters_index(&self) -> usize {
        self.as_ref().parameters_index()
    }

    /// Pagination, for selects with a `LIMIT` clause.
    #[must_use]
    pub fn limit(&self) -> Option<&Limit> {
        match self {
            Statement::Select(select) => select.limit.as_ref(),
            _ => None,
        }
    }

    /// The select statement, if this is one.
    #[must_use]
    pub fn as_select(&self) -> Option<&SelectStatement> {
        match self {
            Statement::Select(select) => Some(select),
            _ => None,
        }
    }

    /// The insert statement, if this is one.
    #[must_use]
    pub fn as_insert(&self) -> Option<&InsertStatement> {
        match self {
            Statement::Insert(insert) => Some(insert),
            _ => None,
        }
    }

    /// The update statement, if this is one.
    #[must_use]
    pub fn as_update(&self) -> Option<&UpdateStatement> {
        match self {
            Statement::Update(update) => Some(update),
            _ => None,
        }
    }

    /// The delete statement, if this is one.
    #[must_use]
    pub fn as_delete(&self) -> Option<&DeleteStatement> {
        match self {
            Statement::Delete(delete) => Some(delete),
            _ => None,
        }
    }
}

impl AsRef<SqlStatement> for Statement {
    fn as_ref(&self) -> &SqlStatement {
        match self {
            Statement::Select(select) => select.as_ref(),
            Statement::Insert(insert) => insert.as_ref(),
            Statement::Update(update) => update.as_ref(),
            Statement::Delete(delete) => delete.as_ref(),
        }
    }
}
