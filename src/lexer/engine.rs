//! Cursor over the token stream used by every clause parser.

use alloc::string::String;

use super::dictionary::Dictionary;
use super::token::{Keyword, Symbol, Token, TokenKind};
use super::tokenizer::Lexer;
use crate::dialect::{DatabaseType, Dialect};
use crate::errors::ParseError;
use crate::statement::SqlStatement;

/// Token stream with a one-token cursor.
///
/// All clause parsers interact with the SQL text only through this type.
pub struct LexerEngine<'a> {
    lexer: Lexer<'a>,
    current: Token,
    database_type: DatabaseType,
    dialect: &'static Dialect,
}

impl<'a> LexerEngine<'a> {
    /// Creates an engine positioned on the first token of `input`.
    ///
    /// `dictionary` must have been built for `dialect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the first token cannot be lexed.
    pub fn new(
        input: &'a str,
        dictionary: &'a Dictionary,
        database_type: DatabaseType,
        dialect: &'static Dialect,
    ) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input, dictionary, dialect);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            database_type,
            dialect,
        })
    }

    /// The SQL text being parsed.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.lexer.input()
    }

    /// The database type tag of this stream.
    #[must_use]
    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// The dialect hooks of this stream.
    #[must_use]
    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Advances the cursor by one token.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if the next token cannot be lexed.
    pub fn next(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Whether the current token is one of `kinds`.
    #[must_use]
    pub fn equal_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    /// Whether the current token is one of `keywords`.
    #[must_use]
    pub fn equal_any_keyword(&self, keywords: &[Keyword]) -> bool {
        matches!(self.current.kind, TokenKind::Keyword(keyword) if keywords.contains(&keyword))
    }

    /// Whether the current token is `symbol`.
    #[must_use]
    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.current.kind == TokenKind::Symbol(symbol)
    }

    /// Whether the cursor reached the end of input.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.current.kind == TokenKind::End
    }

    /// Consumes the current token if it is one of `kinds`.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn skip_if_equal(&mut self, kinds: &[TokenKind]) -> Result<bool, ParseError> {
        if self.equal_any(kinds) {
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the current token if it is one of `keywords`.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn skip_if_keyword(&mut self, keywords: &[Keyword]) -> Result<bool, ParseError> {
        if self.equal_any_keyword(keywords) {
            self.next()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the current token if it is `symbol`.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn skip_if_symbol(&mut self, symbol: Symbol) -> Result<bool, ParseError> {
        self.skip_if_equal(&[TokenKind::Symbol(symbol)])
    }

    /// Consumes every consecutive token that is one of `keywords`.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn skip_all(&mut self, keywords: &[Keyword]) -> Result<(), ParseError> {
        while self.equal_any_keyword(keywords) {
            tracing::trace!(
                target: "sharding_sql_parser::parse",
                keyword = %self.current.literal,
                "skipping dialect keyword"
            );
            self.next()?;
        }
        Ok(())
    }

    /// Advances until the current token is one of `kinds` or the end of input.
    ///
    /// Every `?` passed over increments the statement's parameter index.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn skip_until(
        &mut self,
        kinds: &[TokenKind],
        statement: &mut SqlStatement,
    ) -> Result<(), ParseError> {
        while !self.is_end() && !self.equal_any(kinds) {
            if self.is_symbol(Symbol::Question) {
                statement.increase_parameters_index();
            }
            self.next()?;
        }
        Ok(())
    }

    /// Consumes whatever follows a complete statement.
    ///
    /// The skipped text is not interpreted, but its placeholders are counted
    /// so that the statement's parameter index matches the input.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn skip_rest(&mut self, statement: &mut SqlStatement) -> Result<(), ParseError> {
        if self.is_end() {
            return Ok(());
        }
        tracing::trace!(
            target: "sharding_sql_parser::parse",
            rest = &self.input()[self.current.begin_position()..],
            "skipping tokens after statement"
        );
        self.skip_until(&[], statement)
    }

    /// Consumes the current token, which must be `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnmatchedToken`] if the current token differs.
    pub fn accept(&mut self, kind: impl Into<TokenKind>) -> Result<(), ParseError> {
        let kind = kind.into();
        if self.current.kind != kind {
            return Err(ParseError::UnmatchedToken {
                expected: kind,
                actual: self.current.kind,
                literal: self.current.literal.clone(),
            });
        }
        self.next()
    }

    /// Fails if the current token is one of `keywords`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedToken`] naming the current token.
    pub fn unsupported_if_equal(&self, keywords: &[Keyword]) -> Result<(), ParseError> {
        if self.equal_any_keyword(keywords) {
            return Err(ParseError::UnsupportedToken(self.current.kind));
        }
        Ok(())
    }

    /// Builds a syntax error for the current token.
    #[must_use]
    pub fn syntax_error(&self) -> ParseError {
        ParseError::Syntax {
            kind: self.current.kind,
            literal: self.current.literal.clone(),
            position: self.current.begin_position(),
        }
    }

    /// Skips a balanced parenthesized group starting at the current token.
    ///
    /// Every `?` inside the group increments the statement's parameter index.
    /// Returns the skipped text including both parentheses, or an empty
    /// string if the current token is not `(`.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails, or a syntax error if the
    /// input ends before the group is closed.
    pub fn skip_parentheses(&mut self, statement: &mut SqlStatement) -> Result<String, ParseError> {
        if !self.is_symbol(Symbol::LeftParen) {
            return Ok(String::new());
        }
        let begin_position = self.current.begin_position();
        let mut depth = 0usize;
        self.next()?;
        loop {
            match self.current.kind {
                TokenKind::End => return Err(self.syntax_error()),
                TokenKind::Symbol(Symbol::Question) => statement.increase_parameters_index(),
                TokenKind::Symbol(Symbol::LeftParen) => depth += 1,
                TokenKind::Symbol(Symbol::RightParen) if depth == 0 => break,
                TokenKind::Symbol(Symbol::RightParen) => depth -= 1,
                _ => {}
            }
            self.next()?;
        }
        let text = String::from(&self.input()[begin_position..self.current.end_position]);
        self.next()?;
        Ok(text)
    }
}
