use alloc::string::String;
use alloc::vec::Vec;

use crate::dialect::Dialect;
use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Literal, Symbol, TokenKind};
use crate::parser::exact_value;
use crate::parser::expression::{AliasExpressionParser, source_text};
use crate::statement::{
    AggregationSelectItem, AggregationType, SelectItem, SelectStatement, SqlStatement, SqlToken,
};

/// Parses the comma-separated select list.
#[derive(Debug, Clone, Copy)]
pub struct SelectListClauseParser {
    alias: AliasExpressionParser,
}

impl SelectListClauseParser {
    /// Creates the parser for `dialect`.
    #[must_use]
    pub fn new(dialect: &'static Dialect) -> Self {
        Self {
            alias: AliasExpressionParser::new(dialect),
        }
    }

    /// Parses the select list into `statement.items`.
    ///
    /// The tables are not known yet when the select list is read, so
    /// `owner.column` references are returned as candidate
    /// [`SqlToken::Table`] tokens for the caller to keep once the `FROM`
    /// clause has been parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if an item is missing or contains an unclosed
    /// parenthesis.
    pub fn parse(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SelectStatement,
    ) -> Result<Vec<SqlToken>, ParseError> {
        let mut owner_tokens = Vec::new();
        loop {
            let item = self.parse_select_item(lexer, statement, &mut owner_tokens)?;
            statement.items.push(item);
            if !lexer.skip_if_symbol(Symbol::Comma)? {
                break;
            }
        }
        statement.select_list_last_position = lexer.current().begin_position();
        Ok(owner_tokens)
    }

    fn parse_select_item(
        &self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SelectStatement,
        owner_tokens: &mut Vec<SqlToken>,
    ) -> Result<SelectItem, ParseError> {
        if lexer.is_symbol(Symbol::Star) {
            statement.contains_star = true;
            lexer.next()?;
            self.alias.parse_select_item_alias(lexer)?;
            return Ok(SelectItem::Star { owner: None });
        }

        let begin_position = lexer.current().begin_position();
        if let Some(aggregation_type) = aggregation_type(lexer.current().kind) {
            lexer.next()?;
            if lexer.is_symbol(Symbol::LeftParen) {
                let inner_expression = lexer.skip_parentheses(statement.as_mut())?;
                if !is_operator(lexer) {
                    let mut item = AggregationSelectItem::new(aggregation_type, inner_expression);
                    item.alias = self.alias.parse_select_item_alias(lexer)?;
                    return Ok(SelectItem::Aggregation(item));
                }
            }
        } else {
            let first_literal = lexer.current().literal.clone();
            if parse_common_select_item(lexer, statement.as_mut(), owner_tokens)? {
                statement.contains_star = true;
                self.alias.parse_select_item_alias(lexer)?;
                return Ok(SelectItem::Star {
                    owner: Some(exact_value(&first_literal)),
                });
            }
        }

        while is_operator(lexer) {
            lexer.next()?;
            parse_common_select_item(lexer, statement.as_mut(), owner_tokens)?;
        }
        let expression = exact_value(&source_text(lexer, begin_position));
        let alias = self.alias.parse_select_item_alias(lexer)?;
        Ok(SelectItem::Common { expression, alias })
    }
}

fn aggregation_type(kind: TokenKind) -> Option<AggregationType> {
    match kind {
        TokenKind::Keyword(Keyword::Max) => Some(AggregationType::Max),
        TokenKind::Keyword(Keyword::Min) => Some(AggregationType::Min),
        TokenKind::Keyword(Keyword::Sum) => Some(AggregationType::Sum),
        TokenKind::Keyword(Keyword::Count) => Some(AggregationType::Count),
        TokenKind::Keyword(Keyword::Avg) => Some(AggregationType::Avg),
        _ => None,
    }
}

fn is_operator(lexer: &LexerEngine<'_>) -> bool {
    Symbol::OPERATORS
        .iter()
        .any(|&operator| lexer.is_symbol(operator))
}

/// Consumes one operand of a select item: a parenthesized group, a function
/// call, `owner.column`, `owner.*` or a single token.
///
/// Returns whether the operand was `owner.*`.
fn parse_common_select_item(
    lexer: &mut LexerEngine<'_>,
    statement: &mut SqlStatement,
    owner_tokens: &mut Vec<SqlToken>,
) -> Result<bool, ParseError> {
    if lexer.is_end() {
        return Err(lexer.syntax_error());
    }
    if lexer.is_symbol(Symbol::LeftParen) {
        lexer.skip_parentheses(statement)?;
        return Ok(false);
    }
    if lexer.is_symbol(Symbol::Question) {
        statement.increase_parameters_index();
    }
    let begin_position = lexer.current().begin_position();
    let literal: String = lexer.current().literal.clone();
    let is_identifier = lexer.current().kind == TokenKind::Literal(Literal::Identifier);
    lexer.next()?;

    if lexer.is_symbol(Symbol::LeftParen) {
        lexer.skip_parentheses(statement)?;
    } else if lexer.skip_if_symbol(Symbol::Dot)? {
        if is_identifier {
            owner_tokens.push(SqlToken::Table {
                begin_position,
                original_literals: literal,
            });
        }
        let is_star = lexer.is_symbol(Symbol::Star);
        lexer.next()?;
        return Ok(is_star);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::clause::test_support::with_lexer;
    use alloc::vec;

    fn parse(sql: &str) -> (SelectStatement, Vec<SqlToken>) {
        with_lexer(sql, &Dialect::MYSQL, |lexer| {
            let mut statement = SelectStatement::default();
            let owner_tokens = SelectListClauseParser::new(&Dialect::MYSQL)
                .parse(lexer, &mut statement)
                .unwrap();
            assert!(lexer.equal_any_keyword(&[Keyword::From]) || lexer.is_end());
            (statement, owner_tokens)
        })
    }

    #[test]
    fn test_star_items() {
        let (statement, _) = parse("* FROM t");
        assert!(statement.contains_star);
        assert_eq!(statement.items, vec![SelectItem::Star { owner: None }]);

        let (statement, owner_tokens) = parse("o.*, i.status FROM t");
        assert!(statement.contains_star);
        assert_eq!(
            statement.items,
            vec![
                SelectItem::Star {
                    owner: Some("o".into())
                },
                SelectItem::Common {
                    expression: "i.status".into(),
                    alias: None,
                },
            ]
        );
        assert_eq!(owner_tokens.len(), 2);
        assert_eq!(owner_tokens[1].begin_position(), 5);
    }

    #[test]
    fn test_aggregations() {
        let (statement, _) = parse("COUNT(*) AS c, AVG(price) avg_price, MAX(id) FROM t");
        let aggregations: Vec<_> = statement.aggregation_items().collect();
        assert_eq!(aggregations.len(), 3);
        assert_eq!(aggregations[0].expression(), "COUNT(*)");
        assert_eq!(aggregations[0].alias.as_deref(), Some("c"));
        assert_eq!(aggregations[1].aggregation_type, AggregationType::Avg);
        assert_eq!(aggregations[1].inner_expression, "(price)");
        assert_eq!(aggregations[1].alias.as_deref(), Some("avg_price"));
        assert_eq!(aggregations[2].alias, None);
    }

    #[test]
    fn test_aggregation_in_arithmetic_is_common() {
        let (statement, _) = parse("COUNT(*) + 1 AS n FROM t");
        assert_eq!(
            statement.items,
            vec![SelectItem::Common {
                expression: "COUNT(*) + 1".into(),
                alias: Some("n".into()),
            }]
        );
    }

    #[test]
    fn test_common_items_and_last_position() {
        let (statement, _) = parse("`user_id` uid, concat(a, ?) 'x', price * 2 FROM t");
        assert_eq!(
            statement.items,
            vec![
                SelectItem::Common {
                    expression: "user_id".into(),
                    alias: Some("uid".into()),
                },
                SelectItem::Common {
                    expression: "concat(a, ?)".into(),
                    alias: Some("x".into()),
                },
                SelectItem::Common {
                    expression: "price * 2".into(),
                    alias: None,
                },
            ]
        );
        assert_eq!(statement.select_list_last_position, 43);
        assert_eq!(statement.as_ref().parameters_index(), 1);
    }

    #[test]
    fn test_missing_item() {
        with_lexer("", &Dialect::MYSQL, |lexer| {
            let mut statement = SelectStatement::default();
            assert!(matches!(
                SelectListClauseParser::new(&Dialect::MYSQL).parse(lexer, &mut statement),
                Err(ParseError::Syntax {
                    kind: TokenKind::End,
                    ..
                })
            ));
        });
    }
}
