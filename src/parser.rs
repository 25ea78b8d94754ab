//! Statement parsers and the clause parsers they are built from.
//!
//! Each statement parser drives the clause parsers of its
//! [`facade`] in a fixed order. Clause parsers pull tokens from a
//! [`LexerEngine`](crate::lexer::LexerEngine), consult the
//! [`Dialect`](crate::dialect::Dialect) hooks they were configured with,
//! fill in the statement and register rewrite tokens.

pub mod clause;
mod delete;
pub mod expression;
pub mod facade;
mod insert;
mod select;
mod update;

use alloc::string::String;

pub use delete::DeleteParser;
pub use insert::InsertParser;
pub use select::SelectParser;
pub use update::UpdateParser;

/// Removes identifier quoting from a literal.
///
/// `` `t_order` `` becomes `t_order`.
pub(crate) fn exact_value(literal: &str) -> String {
    literal
        .chars()
        .filter(|c| !matches!(c, '`' | '"' | '[' | ']'))
        .collect()
}
