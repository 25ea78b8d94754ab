//! Simple value expressions captured while parsing.

use alloc::string::String;
use core::fmt::{self, Display};

/// A numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SqlNumber {
    /// Integer or hexadecimal literal.
    Integer(i64),
    /// Decimal or exponent literal.
    Float(f64),
}

impl Display for SqlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlNumber::Integer(value) => write!(f, "{value}"),
            SqlNumber::Float(value) => write!(f, "{value}"),
        }
    }
}

/// An expression as far as sharding is concerned.
///
/// Only literal values and placeholders can take part in routing; every
/// other expression is kept as [`SqlExpression::Ignore`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SqlExpression {
    /// A `?` placeholder with its zero-based parameter index.
    Placeholder(usize),
    /// A string literal.
    Text(String),
    /// A numeric literal.
    Number(SqlNumber),
    /// A bare identifier.
    Identifier(String),
    /// A qualified `owner.name` reference.
    Property {
        /// The qualifier, usually a table name or alias.
        owner: String,
        /// The referenced column.
        name: String,
    },
    /// Anything else, kept as written.
    Ignore(String),
}

impl SqlExpression {
    /// Whether the expression is a literal or a placeholder.
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            SqlExpression::Placeholder(_) | SqlExpression::Text(_) | SqlExpression::Number(_)
        )
    }
}
