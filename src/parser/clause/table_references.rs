use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Literal, Symbol, TokenKind};
use crate::parser::exact_value;
use crate::parser::expression::{AliasExpressionParser, BasicExpressionParser};
use crate::statement::{SqlStatement, SqlToken, Table};

/// Join keywords of the standard grammar.
const JOIN_TYPE_KEYWORDS: &[Keyword] = &[
    Keyword::Inner,
    Keyword::Outer,
    Keyword::Left,
    Keyword::Right,
    Keyword::Full,
    Keyword::Cross,
    Keyword::Natural,
    Keyword::Join,
];

/// Keywords that may follow an index hint introducer.
const INDEX_HINT_TARGETS: &[Keyword] = &[
    Keyword::Index,
    Keyword::Key,
    Keyword::For,
    Keyword::Join,
    Keyword::Order,
    Keyword::Group,
    Keyword::By,
];

/// Parses comma-separated table references with their joins.
///
/// Every table name registers a [`SqlToken::Table`] and is added to the
/// statement's tables.
#[derive(Debug, Clone, Copy)]
pub struct TableReferencesClauseParser {
    dialect: &'static Dialect,
    alias: AliasExpressionParser,
}

impl TableReferencesClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            dialect,
            alias: AliasExpressionParser::new(dialect),
        }
    }

    /// Parses the table references.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedOperation`] for `schema.table`
    /// names, subqueries, and more than one table when
    /// `single_table_only` is set; a syntax error when a table name is
    /// missing.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
        single_table_only: bool,
    ) -> Result<(), ParseError> {
        loop {
            self.parse_table_reference(lexer, statement)?;
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }
        if single_table_only && statement.tables().len() > 1 {
            return Err(ParseError::UnsupportedOperation(
                "Cannot support Multiple-Table.",
            ));
        }
        Ok(())
    }

    fn parse_table_reference(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
    ) -> Result<(), ParseError> {
        self.parse_table_factor(lexer, statement)?;
        self.parse_table_hints(lexer, statement)?;
        while self.skip_join_type(lexer)? {
            if lexer.is_symbol(Symbol::LeftParen) {
                return Err(ParseError::UnsupportedOperation(
                    "Cannot support sub query for join table.",
                ));
            }
            self.parse_table_factor(lexer, statement)?;
            self.parse_table_hints(lexer, statement)?;
            parse_join_condition(lexer, statement)?;
        }
        Ok(())
    }

    fn parse_table_factor(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
    ) -> Result<(), ParseError> {
        if lexer.is_symbol(Symbol::LeftParen) {
            return Err(ParseError::UnsupportedOperation(
                "Cannot support subquery.",
            ));
        }
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
        let alias = self.alias.parse_table_alias(lexer)?;
        statement
            .tables_mut()
            .add(Table::new(exact_value(&literal), alias));
        statement.add_sql_token(SqlToken::Table {
            begin_position,
            original_literals: literal,
        });
        Ok(())
    }

    /// Skips partition lists and index hints following a table name.
    fn parse_table_hints(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
    ) -> Result<(), ParseError> {
        if lexer.skip_if_keyword(self.dialect.table_partition_keywords)? {
            lexer.skip_parentheses(statement)?;
        }
        while lexer.skip_if_keyword(self.dialect.index_hint_keywords)? {
            lexer.skip_all(INDEX_HINT_TARGETS)?;
            lexer.skip_parentheses(statement)?;
        }
        Ok(())
    }

    /// Consumes a join type such as `LEFT OUTER JOIN`; returns whether one
    /// was present.
    fn skip_join_type(&self, lexer: &mut LexerEngine<'_>) -> Result<bool, ParseError> {
        let mut found = false;
        while lexer.equal_any_keyword(JOIN_TYPE_KEYWORDS)
            || lexer.equal_any_keyword(self.dialect.join_type_keywords)
        {
            lexer.next()?;
            found = true;
        }
        Ok(found)
    }
}

/// Parses `ON a = b [AND c = d ...]` or `USING (...)`.
fn parse_join_condition(
    lexer: &mut LexerEngine<'_>,
    statement: &mut SqlStatement,
) -> Result<(), ParseError> {
    if lexer.skip_if_keyword(&[Keyword::On])? {
        loop {
            BasicExpressionParser.parse(lexer, statement)?;
            lexer.accept(Symbol::Eq)?;
            BasicExpressionParser.parse(lexer, statement)?;
            if !lexer.skip_if_keyword(&[Keyword::And])? {
                break;
            }
        }
    } else if lexer.skip_if_keyword(&[Keyword::Using])? {
        lexer.skip_parentheses(statement)?;
    }
    Ok(())
}
