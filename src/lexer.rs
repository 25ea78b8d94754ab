//! Lexing layer: positioned tokens and the token stream cursor.
//!
//! The lexer is deliberately small. It recognizes only what the clause
//! parsers need in order to delimit clauses and to compute exact offsets
//! for rewrite tokens.

mod dictionary;
mod engine;
mod token;
mod tokenizer;

pub use dictionary::Dictionary;
pub use engine::LexerEngine;
pub use token::{Keyword, Literal, Symbol, Token, TokenKind};
pub use tokenizer::Lexer;
