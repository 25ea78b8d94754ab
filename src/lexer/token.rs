//! Tokens produced by the lexer.

use alloc::string::String;
use core::fmt::{self, Display};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The token text as it appears in the input.
    ///
    /// Quoted identifiers keep their quotes, string literals keep only the
    /// characters between the quotes.
    pub literal: String,
    /// The offset of the character immediately after the token.
    pub end_position: usize,
}

impl Token {
    /// Offset of the first character of the token.
    ///
    /// String literals also cover their two quotes.
    #[must_use]
    pub fn begin_position(&self) -> usize {
        let quotes = match self.kind {
            TokenKind::Literal(Literal::Chars) => 2,
            _ => 0,
        };
        self.end_position.saturating_sub(self.literal.len() + quotes)
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// A keyword recognized by the active dialect.
    Keyword(Keyword),
    /// A literal value or identifier.
    Literal(Literal),
    /// A punctuation or operator symbol.
    Symbol(Symbol),
    /// End of input.
    End,
}

impl From<Keyword> for TokenKind {
    #[inline]
    fn from(keyword: Keyword) -> Self {
        TokenKind::Keyword(keyword)
    }
}

impl From<Literal> for TokenKind {
    #[inline]
    fn from(literal: Literal) -> Self {
        TokenKind::Literal(literal)
    }
}

impl From<Symbol> for TokenKind {
    #[inline]
    fn from(symbol: Symbol) -> Self {
        TokenKind::Symbol(symbol)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => f.write_str(keyword.as_str()),
            TokenKind::Literal(literal) => f.write_str(literal.name()),
            TokenKind::Symbol(symbol) => f.write_str(symbol.name()),
            TokenKind::End => f.write_str("END"),
        }
    }
}

/// Literal token classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// Integer literal.
    Int,
    /// Decimal or exponent literal.
    Float,
    /// Hexadecimal literal (`0x1F` or `X'1F'`).
    Hex,
    /// Quoted character string.
    Chars,
    /// Identifier, quoted or not.
    Identifier,
    /// User or system variable (`@name`, `@@name`).
    Variable,
}

impl Literal {
    /// Upper-case name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Literal::Int => "INT",
            Literal::Float => "FLOAT",
            Literal::Hex => "HEX",
            Literal::Chars => "CHARS",
            Literal::Identifier => "IDENTIFIER",
            Literal::Variable => "VARIABLE",
        }
    }
}

macro_rules! symbols {
    ($($variant:ident => $text:literal, $name:literal;)+) => {
        /// Punctuation and operator symbols.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Symbol {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )+
        }

        impl Symbol {
            /// All symbols, longest first so the lexer can match greedily.
            pub(crate) const ALL: &'static [Symbol] = &[$(Symbol::$variant,)+];

            /// The symbol as written in SQL.
            #[must_use]
            pub fn text(self) -> &'static str {
                match self {
                    $(Symbol::$variant => $text,)+
                }
            }

            /// Upper-case name used in diagnostics.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Symbol::$variant => $name,)+
                }
            }
        }
    };
}

symbols! {
    LtEqGt => "<=>", "LT_EQ_GT";
    DoubleColon => "::", "DOUBLE_COLON";
    ColonEq => ":=", "COLON_EQ";
    LtEq => "<=", "LT_EQ";
    GtEq => ">=", "GT_EQ";
    LtGt => "<>", "LT_GT";
    BangEq => "!=", "BANG_EQ";
    BangGt => "!>", "BANG_GT";
    BangLt => "!<", "BANG_LT";
    DoubleAmp => "&&", "DOUBLE_AMP";
    DoubleBar => "||", "DOUBLE_BAR";
    DoubleLt => "<<", "DOUBLE_LT";
    DoubleGt => ">>", "DOUBLE_GT";
    LeftParen => "(", "LEFT_PAREN";
    RightParen => ")", "RIGHT_PAREN";
    LeftBrace => "{", "LEFT_BRACE";
    RightBrace => "}", "RIGHT_BRACE";
    LeftBracket => "[", "LEFT_BRACKET";
    RightBracket => "]", "RIGHT_BRACKET";
    Semi => ";", "SEMI";
    Comma => ",", "COMMA";
    Dot => ".", "DOT";
    Plus => "+", "PLUS";
    Sub => "-", "SUB";
    Star => "*", "STAR";
    Slash => "/", "SLASH";
    Question => "?", "QUESTION";
    Eq => "=", "EQ";
    Gt => ">", "GT";
    Lt => "<", "LT";
    Bang => "!", "BANG";
    Tilde => "~", "TILDE";
    Caret => "^", "CARET";
    Percent => "%", "PERCENT";
    Colon => ":", "COLON";
    Amp => "&", "AMP";
    Bar => "|", "BAR";
}

impl Symbol {
    /// Arithmetic, bitwise and logical operators that may continue a scalar
    /// expression.
    pub(crate) const OPERATORS: &'static [Symbol] = &[
        Symbol::Plus,
        Symbol::Sub,
        Symbol::Star,
        Symbol::Slash,
        Symbol::Percent,
        Symbol::Amp,
        Symbol::Bar,
        Symbol::DoubleAmp,
        Symbol::DoubleBar,
        Symbol::Caret,
    ];
}

macro_rules! keywords {
    ($($variant:ident => $text:literal,)+) => {
        /// SQL keywords known to at least one dialect.
        ///
        /// Whether a word is lexed as a keyword or as an identifier is decided
        /// by the dialect's [`Dictionary`](super::Dictionary).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )+
        }

        impl Keyword {
            /// The keyword as written in SQL, upper-cased.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)+
                }
            }
        }
    };
}

keywords! {
    Select => "SELECT",
    Insert => "INSERT",
    Update => "UPDATE",
    Delete => "DELETE",
    Create => "CREATE",
    Alter => "ALTER",
    Drop => "DROP",
    Truncate => "TRUNCATE",
    Table => "TABLE",
    From => "FROM",
    Where => "WHERE",
    And => "AND",
    Or => "OR",
    Not => "NOT",
    In => "IN",
    Between => "BETWEEN",
    Like => "LIKE",
    Is => "IS",
    Null => "NULL",
    As => "AS",
    On => "ON",
    Using => "USING",
    Join => "JOIN",
    Inner => "INNER",
    Outer => "OUTER",
    Left => "LEFT",
    Right => "RIGHT",
    Full => "FULL",
    Cross => "CROSS",
    Natural => "NATURAL",
    Group => "GROUP",
    Order => "ORDER",
    By => "BY",
    Asc => "ASC",
    Desc => "DESC",
    Having => "HAVING",
    Limit => "LIMIT",
    Offset => "OFFSET",
    Union => "UNION",
    Intersect => "INTERSECT",
    Except => "EXCEPT",
    Minus => "MINUS",
    Into => "INTO",
    Values => "VALUES",
    Set => "SET",
    Key => "KEY",
    Index => "INDEX",
    For => "FOR",
    Use => "USE",
    With => "WITH",
    Distinct => "DISTINCT",
    All => "ALL",
    Count => "COUNT",
    Sum => "SUM",
    Avg => "AVG",
    Max => "MAX",
    Min => "MIN",
    Procedure => "PROCEDURE",
    Length => "LENGTH",
    Show => "SHOW",
    LowPriority => "LOW_PRIORITY",
    HighPriority => "HIGH_PRIORITY",
    Delayed => "DELAYED",
    Ignore => "IGNORE",
    Quick => "QUICK",
    StraightJoin => "STRAIGHT_JOIN",
    SqlSmallResult => "SQL_SMALL_RESULT",
    SqlBigResult => "SQL_BIG_RESULT",
    SqlBufferResult => "SQL_BUFFER_RESULT",
    SqlCache => "SQL_CACHE",
    SqlNoCache => "SQL_NO_CACHE",
    SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
    DistinctRow => "DISTINCTROW",
    Partition => "PARTITION",
    Force => "FORCE",
    Value => "VALUE",
    Duplicate => "DUPLICATE",
    Rollup => "ROLLUP",
    Regexp => "REGEXP",
    Describe => "DESCRIBE",
}

impl Keyword {
    /// Keywords every dialect recognizes.
    pub const DEFAULT: &'static [Keyword] = &[
        Keyword::Select,
        Keyword::Insert,
        Keyword::Update,
        Keyword::Delete,
        Keyword::Create,
        Keyword::Alter,
        Keyword::Drop,
        Keyword::Truncate,
        Keyword::Table,
        Keyword::From,
        Keyword::Where,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::In,
        Keyword::Between,
        Keyword::Like,
        Keyword::Is,
        Keyword::Null,
        Keyword::As,
        Keyword::On,
        Keyword::Using,
        Keyword::Join,
        Keyword::Inner,
        Keyword::Outer,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Cross,
        Keyword::Natural,
        Keyword::Group,
        Keyword::Order,
        Keyword::By,
        Keyword::Asc,
        Keyword::Desc,
        Keyword::Having,
        Keyword::Limit,
        Keyword::Offset,
        Keyword::Union,
        Keyword::Intersect,
        Keyword::Except,
        Keyword::Minus,
        Keyword::Into,
        Keyword::Values,
        Keyword::Set,
        Keyword::Key,
        Keyword::Index,
        Keyword::For,
        Keyword::Use,
        Keyword::With,
        Keyword::Distinct,
        Keyword::All,
        Keyword::Count,
        Keyword::Sum,
        Keyword::Avg,
        Keyword::Max,
        Keyword::Min,
        Keyword::Procedure,
        Keyword::Length,
        Keyword::Show,
    ];
}

impl Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
