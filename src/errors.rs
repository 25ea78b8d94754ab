//! Submodule defining the errors used across the crate.

use alloc::string::String;

use crate::lexer::TokenKind;

/// Errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    /// Unexpected character in input.
    #[error("Unexpected character '{char}' at position {pos}")]
    UnexpectedChar {
        /// The unexpected character.
        char: char,
        /// Position in input.
        pos: usize,
    },
    /// Unterminated string literal.
    #[error("Unterminated string literal starting at position {pos}")]
    UnterminatedString {
        /// Position where string started.
        pos: usize,
    },
    /// Unterminated quoted identifier.
    #[error("Unterminated quoted identifier starting at position {pos}")]
    UnterminatedIdentifier {
        /// Position where the identifier started.
        pos: usize,
    },
    /// Unterminated block comment.
    #[error("Unterminated block comment starting at position {pos}")]
    UnterminatedComment {
        /// Position where the comment started.
        pos: usize,
    },
    /// Invalid hex digit in a hexadecimal literal.
    #[error("Invalid hex digit '{char}' at position {pos}")]
    InvalidHexDigit {
        /// The invalid character.
        char: char,
        /// Position in input.
        pos: usize,
    },
}

/// Errors that abort the parse of a SQL statement.
///
/// Parsing is all-or-nothing: when any of these is returned no statement is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Lexer error.
    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),
    /// The current token matches none of the alternatives allowed here.
    #[error("SQL syntax error, token is '{kind}', literals is '{literal}'.")]
    Syntax {
        /// Kind of the offending token.
        kind: TokenKind,
        /// Text of the offending token.
        literal: String,
        /// Offset of the offending token in the input.
        position: usize,
    },
    /// The current token is not the single token kind allowed here.
    #[error(
        "SQL syntax error, expected token is {expected}, actual token is {actual}, literals is '{literal}'."
    )]
    UnmatchedToken {
        /// The expected token kind.
        expected: TokenKind,
        /// The token kind found instead.
        actual: TokenKind,
        /// Text of the token found.
        literal: String,
    },
    /// A recognized token that this parser does not support.
    #[error("Not supported token {0}")]
    UnsupportedToken(TokenKind),
    /// Valid syntax that cannot be handled by the sharding layer.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Keyword, Literal, Symbol};
    use alloc::string::ToString;

    #[test]
    fn test_messages() {
        let syntax = ParseError::Syntax {
            kind: TokenKind::Literal(Literal::Identifier),
            literal: "abc".into(),
            position: 6,
        };
        assert_eq!(
            syntax.to_string(),
            "SQL syntax error, token is 'IDENTIFIER', literals is 'abc'."
        );

        let unmatched = ParseError::UnmatchedToken {
            expected: TokenKind::Symbol(Symbol::Eq),
            actual: TokenKind::End,
            literal: "".into(),
        };
        assert_eq!(
            unmatched.to_string(),
            "SQL syntax error, expected token is EQ, actual token is END, literals is ''."
        );

        let unsupported = ParseError::UnsupportedToken(TokenKind::Keyword(Keyword::Procedure));
        assert_eq!(unsupported.to_string(), "Not supported token PROCEDURE");
    }

    #[test]
    fn test_lexer_error_converts() {
        let error: ParseError = LexerError::UnterminatedString { pos: 3 }.into();
        assert_eq!(
            error.to_string(),
            "Lexer error: Unterminated string literal starting at position 3"
        );
    }
}
