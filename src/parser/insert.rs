use super::facade::InsertClauseParserFacade;
use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Symbol};
use crate::statement::InsertStatement;

/// Parses `INSERT` statements in the `VALUES` and `SET` forms.
#[derive(Debug, Clone, Copy)]
pub struct InsertParser {
    facade: InsertClauseParserFacade,
}

impl InsertParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            facade: InsertClauseParserFacade::new(dialect),
        }
    }

    /// Parses the statement starting at the `INSERT` keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedOperation`] for `INSERT ... SELECT`
    /// and the first error raised by a clause parser.
    pub fn parse(&self, lexer: &mut LexerEngine<'_>) -> Result<InsertStatement, ParseError> {
        let facade = &self.facade;
        let mut statement = InsertStatement::default();
        lexer.accept(Keyword::Insert)?;
        facade.insert_into.parse(lexer, &mut statement)?;
        facade.insert_columns.parse(lexer, &mut statement)?;
        if lexer.equal_any_keyword(&[Keyword::Select]) || lexer.is_symbol(Symbol::LeftParen) {
            return Err(ParseError::UnsupportedOperation("Cannot INSERT SELECT"));
        }
        facade.insert_values.parse(lexer, &mut statement)?;
        facade.insert_set.parse(lexer, &mut statement)?;
        facade.insert_duplicate_key_update.parse(lexer, &mut statement)?;
        lexer.skip_rest(statement.as_mut())?;
        Ok(statement)
    }
}
