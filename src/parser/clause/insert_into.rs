use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Literal, Symbol, TokenKind};
use crate::parser::exact_value;
use crate::statement::{InsertStatement, SqlToken, Table};

/// Parses `[modifiers] INTO table [PARTITION (...)]`.
#[derive(Debug, Clone, Copy)]
pub struct InsertIntoClauseParser {
    dialect: &'static Dialect,
}

impl InsertIntoClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the target table into `statement`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnmatchedToken`] if `INTO` is missing, a syntax
    /// error if the table name is missing and
    /// [`ParseError::UnsupportedOperation`] for `schema.table`.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut InsertStatement,
    ) -> Result<(), ParseError> {
        lexer.skip_all(self.dialect.skipped_before_into)?;
        lexer.accept(Keyword::Into)?;
        if lexer.current().kind != TokenKind::Literal(Literal::Identifier) {
            return Err(lexer.syntax_error());
        }
        let begin_position = lexer.current().begin_position();
        let literal = lexer.current().literal.clone();
        lexer.next()?;
        if lexer.is_symbol(Symbol::Dot) {
            return Err(ParseError::UnsupportedOperation(
                "Cannot support SQL for `schema.table`",
            ));
        }
        let base = statement.as_mut();
        base.tables_mut().add(Table::new(exact_value(&literal), None));
        base.add_sql_token(SqlToken::Table {
            begin_position,
            original_literals: literal,
        });
        while lexer.skip_if_keyword(self.dialect.skipped_between_table_and_values)? {
            lexer.skip_parentheses(base)?;
        }
        Ok(())
    }
}
