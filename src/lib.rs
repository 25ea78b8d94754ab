#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod dialect;
pub mod engine;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod statement;
#[cfg(feature = "testing")]
pub mod testing;

pub use dialect::{DatabaseType, Dialect, UnknownDatabaseType};
pub use engine::{SqlParsingEngine, parse};
pub use errors::{LexerError, ParseError};
pub use statement::{
    Column, Condition, Conditions, DeleteStatement, InsertStatement, Limit, LimitValue,
    SelectStatement, ShardingOperator, SqlExpression, SqlStatement, SqlToken, Statement, Table,
    Tables, UpdateStatement,
};
