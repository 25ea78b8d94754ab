use crate::errors::ParseError;
use crate::lexer::{Keyword, LexerEngine, Literal, Symbol, TokenKind};
use crate::statement::{Limit, LimitSource, LimitValue, SelectStatement, SqlStatement, SqlToken};

/// Parses `LIMIT {[offset,] row_count | row_count OFFSET offset}`.
///
/// Literal slots register [`SqlToken::Offset`] or [`SqlToken::RowCount`]
/// at the literal; placeholder slots take the next parameter index instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitClauseParser;

impl LimitClauseParser {
    /// Parses the clause if the current token is `LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if a slot is neither an integer literal that
    /// fits in `i64` nor `?`.
    pub fn parse(
        self,
        lexer: &mut LexerEngine<'_>,
        statement: &mut SelectStatement,
    ) -> Result<(), ParseError> {
        if !lexer.skip_if_keyword(&[Keyword::Limit])? {
            return Ok(());
        }
        let base = statement.as_mut();
        let first = LimitSlot::read(lexer, base)?;
        let (offset, row_count) = if lexer.skip_if_symbol(Symbol::Comma)? {
            (Some(first), LimitSlot::read(lexer, base)?)
        } else if lexer.skip_if_keyword(&[Keyword::Offset])? {
            (Some(LimitSlot::read(lexer, base)?), first)
        } else {
            (None, first)
        };
        let mut limit = Limit::new(lexer.database_type());
        limit.offset = offset.map(|slot| slot.finish(true, base));
        limit.row_count = Some(row_count.finish(false, base));
        statement.limit = Some(limit);
        Ok(())
    }
}

/// A consumed limit slot whose role is not known yet.
struct LimitSlot {
    source: LimitSource,
    begin_position: usize,
}

impl LimitSlot {
    /// Consumes an integer literal or a placeholder.
    ///
    /// Placeholders take their index as soon as they are read so that
    /// indices follow source order.
    fn read(lexer: &mut LexerEngine<'_>, statement: &mut SqlStatement) -> Result<Self, ParseError> {
        let token = lexer.current();
        let begin_position = token.begin_position();
        let source = match token.kind {
            TokenKind::Literal(Literal::Int) => LimitSource::Literal(
                token
                    .literal
                    .parse::<i64>()
                    .map_err(|_| lexer.syntax_error())?,
            ),
            TokenKind::Symbol(Symbol::Question) => {
                let index = statement.parameters_index();
                statement.increase_parameters_index();
                LimitSource::Parameter(index)
            }
            _ => return Err(lexer.syntax_error()),
        };
        lexer.next()?;
        Ok(Self {
            source,
            begin_position,
        })
    }

    /// Assigns the slot its role, appending a rewrite token for literals.
    fn finish(self, is_offset: bool, statement: &mut SqlStatement) -> LimitValue {
        if let LimitSource::Literal(value) = self.source {
            statement.push_sql_token(if is_offset {
                SqlToken::Offset {
                    begin_position: self.begin_position,
                    offset: value,
                }
            } else {
                SqlToken::RowCount {
                    begin_position: self.begin_position,
                    row_count: value,
                }
            });
        }
        LimitValue {
            source: self.source,
            is_offset,
        }
    }
}
