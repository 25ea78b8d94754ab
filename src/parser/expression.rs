//! Expression and alias parsers shared by the clause parsers.

use alloc::string::String;

use super::exact_value;
use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Literal, Symbol, TokenKind};
use crate::statement::{SqlExpression, SqlNumber, SqlStatement, SqlToken};

/// Keywords that may alias a select item without `AS` in every dialect.
const SELECT_ITEM_ALIAS_KEYWORDS: &[Keyword] = &[
    Keyword::Count,
    Keyword::Sum,
    Keyword::Avg,
    Keyword::Max,
    Keyword::Min,
    Keyword::Length,
];

/// Tokens that may always serve as an alias.
const ALIAS_LITERALS: &[TokenKind] = &[
    TokenKind::Literal(Literal::Identifier),
    TokenKind::Literal(Literal::Chars),
];

/// Parses a single operand: a literal, a placeholder, a column or property
/// reference, or any other expression which is skipped and kept as text.
///
/// Every `?` consumed, including those inside skipped expressions, advances
/// the statement's parameter index.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicExpressionParser;

impl BasicExpressionParser {
    /// Parses the expression under the cursor.
    ///
    /// A property whose owner is one of the statement's table names also
    /// registers a [`SqlToken::Table`] for the owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression contains an unclosed parenthesis
    /// or cannot be lexed.
    pub fn parse(
        self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
    ) -> Result<SqlExpression, ParseError> {
        let begin_position = lexer.current().begin_position();
        if lexer.is_symbol(Symbol::Sub) || lexer.is_symbol(Symbol::Plus) {
            return self.parse_signed(lexer, statement, begin_position);
        }
        if lexer.is_symbol(Symbol::LeftParen) {
            lexer.skip_parentheses(statement)?;
            skip_rest_composite(lexer, statement)?;
            return Ok(SqlExpression::Ignore(source_text(lexer, begin_position)));
        }

        let literal = lexer.current().literal.clone();
        let is_identifier = lexer.current().kind == TokenKind::Literal(Literal::Identifier);
        let expression = operand(lexer, statement);
        lexer.next()?;

        if lexer.skip_if_symbol(Symbol::Dot)? {
            let property = lexer.current().literal.clone();
            lexer.next()?;
            if skip_if_composite(lexer, statement)? {
                return Ok(SqlExpression::Ignore(source_text(lexer, begin_position)));
            }
            let owner = exact_value(&literal);
            if is_identifier && statement.tables().contains_name(&owner) {
                statement.add_sql_token(SqlToken::Table {
                    begin_position,
                    original_literals: literal,
                });
            }
            return Ok(SqlExpression::Property {
                owner,
                name: exact_value(&property),
            });
        }

        if skip_if_composite(lexer, statement)? {
            return Ok(SqlExpression::Ignore(source_text(lexer, begin_position)));
        }
        Ok(expression)
    }

    /// Parses an operand behind a unary `-` or `+`.
    ///
    /// Only a signed number keeps its value; anything else is kept as text.
    fn parse_signed(
        self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SqlStatement,
        begin_position: usize,
    ) -> Result<SqlExpression, ParseError> {
        let negative = lexer.is_symbol(Symbol::Sub);
        lexer.next()?;
        if lexer.is_end() {
            return Err(lexer.syntax_error());
        }
        let operand = self.parse(lexer, statement)?;
        let signed = match operand {
            SqlExpression::Number(number) if !negative => Some(number),
            SqlExpression::Number(SqlNumber::Integer(value)) => {
                value.checked_neg().map(SqlNumber::Integer)
            }
            SqlExpression::Number(SqlNumber::Float(value)) => Some(SqlNumber::Float(-value)),
            _ => None,
        };
        Ok(signed.map_or_else(
            || SqlExpression::Ignore(source_text(lexer, begin_position)),
            SqlExpression::Number,
        ))
    }
}

/// Classifies the current token without consuming it.
fn operand(lexer: &LexerEngine<'_>, statement: &mut SqlStatement) -> SqlExpression {
    let token = lexer.current();
    match token.kind {
        TokenKind::Symbol(Symbol::Question) => {
            let index = statement.parameters_index();
            statement.increase_parameters_index();
            SqlExpression::Placeholder(index)
        }
        TokenKind::Literal(Literal::Chars) => SqlExpression::Text(token.literal.clone()),
        TokenKind::Literal(Literal::Int) => token.literal.parse::<i64>().map_or_else(
            |_| SqlExpression::Ignore(token.literal.clone()),
            |value| SqlExpression::Number(SqlNumber::Integer(value)),
        ),
        TokenKind::Literal(Literal::Float) => token.literal.parse::<f64>().map_or_else(
            |_| SqlExpression::Ignore(token.literal.clone()),
            |value| SqlExpression::Number(SqlNumber::Float(value)),
        ),
        TokenKind::Literal(Literal::Hex) => parse_hex(&token.literal).map_or_else(
            || SqlExpression::Ignore(token.literal.clone()),
            |value| SqlExpression::Number(SqlNumber::Integer(value)),
        ),
        TokenKind::Literal(Literal::Identifier) => {
            SqlExpression::Identifier(exact_value(&token.literal))
        }
        _ => SqlExpression::Ignore(token.literal.clone()),
    }
}

/// Parses `0x1F` and `X'1F'` literals.
fn parse_hex(literal: &str) -> Option<i64> {
    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .or_else(|| {
            literal
                .get(2..)
                .and_then(|rest| rest.strip_suffix('\''))
                .filter(|_| literal.starts_with(['x', 'X']))
        })?;
    i64::from_str_radix(digits, 16).ok()
}

fn is_composite_operator(lexer: &LexerEngine<'_>) -> bool {
    Symbol::OPERATORS
        .iter()
        .any(|&operator| lexer.is_symbol(operator))
        || lexer.is_symbol(Symbol::Dot)
}

fn skip_if_composite(
    lexer: &mut LexerEngine<'_>,
    statement: &mut SqlStatement,
) -> Result<bool, ParseError> {
    if is_composite_operator(lexer) || lexer.is_symbol(Symbol::LeftParen) {
        lexer.skip_parentheses(statement)?;
        skip_rest_composite(lexer, statement)?;
        return Ok(true);
    }
    Ok(false)
}

fn skip_rest_composite(
    lexer: &mut LexerEngine<'_>,
    statement: &mut SqlStatement,
) -> Result<(), ParseError> {
    while is_composite_operator(lexer) {
        lexer.next()?;
        while lexer.is_symbol(Symbol::Sub)
            || lexer.is_symbol(Symbol::Plus)
            || lexer.is_symbol(Symbol::Tilde)
        {
            lexer.next()?;
        }
        if lexer.is_end() {
            return Err(lexer.syntax_error());
        }
        if lexer.is_symbol(Symbol::Question) {
            statement.increase_parameters_index();
        }
        if !lexer.is_symbol(Symbol::LeftParen) {
            lexer.next()?;
        }
        lexer.skip_parentheses(statement)?;
    }
    Ok(())
}

/// The input from `begin_position` up to the current token, without
/// trailing whitespace.
pub(crate) fn source_text(lexer: &LexerEngine<'_>, begin_position: usize) -> String {
    let end_position = lexer.current().begin_position().max(begin_position);
    String::from(lexer.input()[begin_position..end_position].trim_end())
}

/// Parses optional select item and table aliases.
#[derive(Debug, Clone, Copy)]
pub struct AliasExpressionParser {
    dialect: &'static Dialect,
}

impl AliasExpressionParser {
    /// Creates an alias parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self { dialect }
    }

    /// Parses the alias of a select item, if present.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn parse_select_item_alias(
        &self,
        lexer: &mut LexerEngine<'_>,
    ) -> Result<Option<String>, ParseError> {
        if lexer.skip_if_keyword(&[Keyword::As])? {
            return parse_alias_after_as(lexer);
        }
        if lexer.equal_any(ALIAS_LITERALS)
            || lexer.equal_any_keyword(SELECT_ITEM_ALIAS_KEYWORDS)
            || lexer.equal_any_keyword(self.dialect.select_item_alias_keywords)
        {
            return parse_alias(lexer).map(Some);
        }
        Ok(None)
    }

    /// Parses the alias of a table, if present.
    ///
    /// # Errors
    ///
    /// Returns a lexer error if advancing fails.
    pub fn parse_table_alias(
        &self,
        lexer: &mut LexerEngine<'_>,
    ) -> Result<Option<String>, ParseError> {
        if lexer.skip_if_keyword(&[Keyword::As])? {
            return parse_alias_after_as(lexer);
        }
        if lexer.equal_any(ALIAS_LITERALS)
            || lexer.equal_any_keyword(self.dialect.table_alias_keywords)
        {
            return parse_alias(lexer).map(Some);
        }
        Ok(None)
    }
}

fn parse_alias_after_as(lexer: &mut LexerEngine<'_>) -> Result<Option<String>, ParseError> {
    if lexer.is_end() || matches!(lexer.current().kind, TokenKind::Symbol(_)) {
        return Ok(None);
    }
    parse_alias(lexer).map(Some)
}

fn parse_alias(lexer: &mut LexerEngine<'_>) -> Result<String, ParseError> {
    let alias = exact_value(&lexer.current().literal);
    lexer.next()?;
    Ok(alias)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DatabaseType;
    use crate::lexer::Dictionary;
    use crate::statement::Table;

    fn parse(sql: &str, statement: &mut SqlStatement) -> (SqlExpression, String) {
        let dictionary = Dictionary::new(&Dialect::MYSQL);
        let mut lexer =
            LexerEngine::new(sql, &dictionary, DatabaseType::MySql, &Dialect::MYSQL).unwrap();
        let expression = BasicExpressionParser.parse(&mut lexer, statement).unwrap();
        (expression, lexer.current().literal.clone())
    }

    #[test]
    fn test_operands() {
        let mut statement = SqlStatement::default();
        assert_eq!(
            parse("? AND", &mut statement),
            (SqlExpression::Placeholder(0), "AND".into())
        );
        assert_eq!(
            parse("?", &mut statement).0,
            SqlExpression::Placeholder(1)
        );
        assert_eq!(
            parse("'init'", &mut statement).0,
            SqlExpression::Text("init".into())
        );
        assert_eq!(
            parse("42", &mut statement).0,
            SqlExpression::Number(SqlNumber::Integer(42))
        );
        assert_eq!(
            parse("0x1F", &mut statement).0,
            SqlExpression::Number(SqlNumber::Integer(31))
        );
        assert_eq!(
            parse("X'ff'", &mut statement).0,
            SqlExpression::Number(SqlNumber::Integer(255))
        );
        assert_eq!(
            parse("`user_id`", &mut statement).0,
            SqlExpression::Identifier("user_id".into())
        );
        assert_eq!(statement.parameters_index(), 2);
    }

    #[test]
    fn test_signed_operands() {
        let mut statement = SqlStatement::default();
        assert_eq!(
            parse("-1 LIMIT", &mut statement),
            (SqlExpression::Number(SqlNumber::Integer(-1)), "LIMIT".into())
        );
        assert_eq!(
            parse("+2.5", &mut statement).0,
            SqlExpression::Number(SqlNumber::Float(2.5))
        );
        assert_eq!(
            parse("- -3", &mut statement).0,
            SqlExpression::Number(SqlNumber::Integer(3))
        );
        assert_eq!(
            parse("-? AND", &mut statement),
            (SqlExpression::Ignore("-?".into()), "AND".into())
        );
        assert_eq!(
            parse("-1 + ? AND", &mut statement),
            (SqlExpression::Ignore("-1 + ?".into()), "AND".into())
        );
        assert_eq!(
            parse("a * -? AND", &mut statement),
            (SqlExpression::Ignore("a * -?".into()), "AND".into())
        );
        assert_eq!(statement.parameters_index(), 3);
    }

    #[test]
    fn test_composite_expressions_are_ignored() {
        let mut statement = SqlStatement::default();
        assert_eq!(
            parse("user_id + ? * 2 AND x", &mut statement),
            (SqlExpression::Ignore("user_id + ? * 2".into()), "AND".into())
        );
        assert_eq!(
            parse("now() LIMIT", &mut statement),
            (SqlExpression::Ignore("now()".into()), "LIMIT".into())
        );
        assert_eq!(
            parse("(?, ?) )", &mut statement),
            (SqlExpression::Ignore("(?, ?)".into()), ")".into())
        );
        assert_eq!(statement.parameters_index(), 3);
    }

    #[test]
    fn test_property_owner_emits_table_token() {
        let mut statement = SqlStatement::default();
        statement.tables_mut().add(Table::new("t_order", Some("o".into())));

        let (expression, _) = parse("t_order.order_id", &mut statement);
        assert_eq!(
            expression,
            SqlExpression::Property {
                owner: "t_order".into(),
                name: "order_id".into(),
            }
        );
        let (expression, _) = parse("o.user_id", &mut statement);
        assert_eq!(
            expression,
            SqlExpression::Property {
                owner: "o".into(),
                name: "user_id".into(),
            }
        );
        assert_eq!(
            statement.sql_tokens(),
            [SqlToken::Table {
                begin_position: 0,
                original_literals: "t_order".into(),
            }]
        );
    }

    #[test]
    fn test_aliases() {
        let dictionary = Dictionary::new(&Dialect::MYSQL);
        let parser = AliasExpressionParser::new(&Dialect::MYSQL);
        let mut lexer = LexerEngine::new(
            "AS uid length `o` WHERE",
            &dictionary,
            DatabaseType::MySql,
            &Dialect::MYSQL,
        )
        .unwrap();
        assert_eq!(
            parser.parse_select_item_alias(&mut lexer).unwrap(),
            Some("uid".into())
        );
        assert_eq!(
            parser.parse_table_alias(&mut lexer).unwrap(),
            Some("length".into())
        );
        assert_eq!(
            parser.parse_table_alias(&mut lexer).unwrap(),
            Some("o".into())
        );
        assert_eq!(parser.parse_table_alias(&mut lexer).unwrap(), None);
        assert!(lexer.equal_any_keyword(&[Keyword::Where]));
    }

    #[test]
    fn test_table_alias_keywords_come_from_dialect() {
        let dictionary = Dictionary::new(&Dialect::STANDARD);
        let parser = AliasExpressionParser::new(&Dialect::STANDARD);
        let mut lexer = LexerEngine::new(
            "length",
            &dictionary,
            DatabaseType::MySql,
            &Dialect::STANDARD,
        )
        .unwrap();
        assert_eq!(parser.parse_table_alias(&mut lexer).unwrap(), None);
    }
}
