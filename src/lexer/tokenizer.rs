//! SQL lexer for tokenizing input.

use alloc::string::{String, ToString};

use super::dictionary::Dictionary;
use super::token::{Keyword, Literal, Symbol, Token, TokenKind};
use crate::dialect::Dialect;
use crate::errors::LexerError;

/// SQL lexer that produces positioned tokens from input.
///
/// Positions are byte offsets into the input.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    dictionary: &'a Dictionary,
    dialect: &'static Dialect,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str, dictionary: &'a Dictionary, dialect: &'static Dialect) -> Self {
        Self {
            input,
            pos: 0,
            dictionary,
            dialect,
        }
    }

    /// The input being tokenized.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Consume and return the next token.
    ///
    /// Once the input is exhausted every call returns an [`TokenKind::End`]
    /// token positioned at the end of the input.
    ///
    /// # Errors
    ///
    /// Returns an error for unterminated quotes or comments and for
    /// characters that cannot start a token.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace()?;

        let bytes = self.input.as_bytes();
        let start_pos = self.pos;

        if self.pos >= bytes.len() {
            return Ok(Token {
                kind: TokenKind::End,
                literal: String::new(),
                end_position: bytes.len(),
            });
        }

        let b = bytes[self.pos];
        let next = bytes.get(self.pos + 1).copied();

        match b {
            b'\'' => self.read_chars(start_pos, b'\''),
            b'"' if self.dialect.double_quoted_strings => self.read_chars(start_pos, b'"'),
            b'"' => self.read_quoted_identifier(start_pos, b'"'),
            b'`' if self.dialect.backtick_identifiers => {
                self.read_quoted_identifier(start_pos, b'`')
            }
            b'0' if matches!(next, Some(b'x' | b'X')) => self.read_hex_number(start_pos),
            b'X' | b'x' if next == Some(b'\'') => self.read_hex_string(start_pos),
            b'@' if self.dialect.variables => Ok(self.read_variable(start_pos)),
            b'.' if next.is_some_and(|n| n.is_ascii_digit()) => Ok(self.read_number(start_pos)),
            _ if b.is_ascii_digit() => Ok(self.read_number(start_pos)),
            _ if is_ident_start(b) => Ok(self.read_identifier(start_pos)),
            _ => self.read_symbol(start_pos),
        }
    }

    /// Skip whitespace and comments.
    fn skip_whitespace(&mut self) -> Result<(), LexerError> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if (b == b'-' && bytes.get(self.pos + 1) == Some(&b'-'))
                || (b == b'#' && self.dialect.hash_comments)
            {
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else if b == b'/' && bytes.get(self.pos + 1) == Some(&b'*') {
                let start = self.pos;
                self.pos += 2;
                while self.pos + 1 < bytes.len()
                    && !(bytes[self.pos] == b'*' && bytes[self.pos + 1] == b'/')
                {
                    self.pos += 1;
                }
                if self.pos + 1 >= bytes.len() {
                    return Err(LexerError::UnterminatedComment { pos: start });
                }
                self.pos += 2;
            } else {
                break;
            }
        }
        Ok(())
    }

    fn read_chars(&mut self, start_pos: usize, quote: u8) -> Result<Token, LexerError> {
        let bytes = self.input.as_bytes();
        self.pos += 1;
        let content_start = self.pos;

        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b == b'\\' && self.dialect.backslash_escapes {
                self.pos += 2;
            } else if b == quote {
                // Doubled quote is an escaped quote
                if bytes.get(self.pos + 1) == Some(&quote) {
                    self.pos += 2;
                } else {
                    let literal = self.input[content_start..self.pos].to_string();
                    self.pos += 1;
                    return Ok(Token {
                        kind: TokenKind::Literal(Literal::Chars),
                        literal,
                        end_position: self.pos,
                    });
                }
            } else {
                self.pos += 1;
            }
        }

        Err(LexerError::UnterminatedString { pos: start_pos })
    }

    fn read_quoted_identifier(&mut self, start_pos: usize, quote: u8) -> Result<Token, LexerError> {
        let bytes = self.input.as_bytes();
        self.pos += 1;

        while self.pos < bytes.len() {
            if bytes[self.pos] == quote {
                if bytes.get(self.pos + 1) == Some(&quote) {
                    self.pos += 2;
                    continue;
                }
                self.pos += 1;
                return Ok(Token {
                    kind: TokenKind::Literal(Literal::Identifier),
                    literal: self.input[start_pos..self.pos].to_string(),
                    end_position: self.pos,
                });
            }
            self.pos += 1;
        }

        Err(LexerError::UnterminatedIdentifier { pos: start_pos })
    }

    fn read_hex_number(&mut self, start_pos: usize) -> Result<Token, LexerError> {
        let bytes = self.input.as_bytes();
        self.pos += 2; // Skip 0x
        let digits_start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_hexdigit() {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(LexerError::InvalidHexDigit {
                char: self.input[self.pos..].chars().next().unwrap_or(' '),
                pos: self.pos,
            });
        }
        Ok(self.token(TokenKind::Literal(Literal::Hex), start_pos))
    }

    fn read_hex_string(&mut self, start_pos: usize) -> Result<Token, LexerError> {
        let bytes = self.input.as_bytes();
        self.pos += 2; // Skip X'

        while self.pos < bytes.len() && bytes[self.pos] != b'\'' {
            let b = bytes[self.pos];
            if !b.is_ascii_hexdigit() {
                return Err(LexerError::InvalidHexDigit {
                    char: self.input[self.pos..].chars().next().unwrap_or(' '),
                    pos: self.pos,
                });
            }
            self.pos += 1;
        }

        if self.pos >= bytes.len() {
            return Err(LexerError::UnterminatedString { pos: start_pos });
        }

        self.pos += 1; // Skip closing quote
        Ok(self.token(TokenKind::Literal(Literal::Hex), start_pos))
    }

    fn read_variable(&mut self, start_pos: usize) -> Token {
        let bytes = self.input.as_bytes();
        self.pos += 1;
        if bytes.get(self.pos) == Some(&b'@') {
            self.pos += 1;
        }
        while self.pos < bytes.len() && (is_ident_cont(bytes[self.pos]) || bytes[self.pos] == b'.')
        {
            self.pos += 1;
        }
        self.token(TokenKind::Literal(Literal::Variable), start_pos)
    }

    fn read_number(&mut self, start_pos: usize) -> Token {
        let bytes = self.input.as_bytes();

        // Read integer part
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }

        // Check for decimal point
        let mut is_float = false;
        if self.pos < bytes.len() && bytes[self.pos] == b'.' {
            is_float = true;
            self.pos += 1;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
            }
        }

        // Check for exponent
        if self.pos < bytes.len() && (bytes[self.pos] == b'e' || bytes[self.pos] == b'E') {
            let mut lookahead = self.pos + 1;
            if matches!(bytes.get(lookahead), Some(b'+' | b'-')) {
                lookahead += 1;
            }
            if bytes.get(lookahead).is_some_and(u8::is_ascii_digit) {
                is_float = true;
                self.pos = lookahead;
                while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                    self.pos += 1;
                }
            }
        }

        let literal = if is_float { Literal::Float } else { Literal::Int };
        self.token(TokenKind::Literal(literal), start_pos)
    }

    fn read_identifier(&mut self, start_pos: usize) -> Token {
        let bytes = self.input.as_bytes();

        while self.pos < bytes.len() && is_ident_cont(bytes[self.pos]) {
            self.pos += 1;
        }

        let word = &self.input[start_pos..self.pos];
        let kind = match self.dictionary.find(word) {
            // ORDER and GROUP are only keywords when followed by BY
            Some(Keyword::Order | Keyword::Group) if !self.followed_by_by() => {
                TokenKind::Literal(Literal::Identifier)
            }
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Literal(Literal::Identifier),
        };
        self.token(kind, start_pos)
    }

    fn followed_by_by(&self) -> bool {
        let rest = self.input[self.pos..].trim_start().as_bytes();
        rest.len() >= 2
            && rest[..2].eq_ignore_ascii_case(b"BY")
            && rest.get(2).is_none_or(|&c| !is_ident_cont(c))
    }

    fn read_symbol(&mut self, start_pos: usize) -> Result<Token, LexerError> {
        let rest = &self.input.as_bytes()[self.pos..];
        let symbol = Symbol::ALL
            .iter()
            .copied()
            .find(|symbol| rest.starts_with(symbol.text().as_bytes()));

        match symbol {
            Some(symbol) => {
                self.pos += symbol.text().len();
                Ok(self.token(TokenKind::Symbol(symbol), start_pos))
            }
            None => Err(LexerError::UnexpectedChar {
                char: self.input[self.pos..].chars().next().unwrap_or(' '),
                pos: start_pos,
            }),
        }
    }

    /// Builds a token whose literal is the input between `start_pos` and the
    /// current position.
    fn token(&self, kind: TokenKind, start_pos: usize) -> Token {
        Token {
            kind,
            literal: self.input[start_pos..self.pos].to_string(),
            end_position: self.pos,
        }
    }
}

/// Check if a byte can start an identifier.
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || !b.is_ascii()
}

/// Check if a byte can continue an identifier.
fn is_ident_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || !b.is_ascii()
}
