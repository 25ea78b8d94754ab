//! Entry point selecting a statement parser for a SQL string.

use crate::dialect::{DatabaseType, Dialect};
use crate::errors::ParseError;
use crate::lexer::{Dictionary, Keyword, LexerEngine, TokenKind};
use crate::parser::{DeleteParser, InsertParser, SelectParser, UpdateParser};
use crate::statement::Statement;

/// Parses SQL strings of one database type.
///
/// The keyword dictionary is built once by [`SqlParsingEngine::new`]; the
/// engine is immutable afterwards and can be shared between threads.
///
/// # Example
///
/// ```
/// use sharding_sql_parser::{DatabaseType, SqlParsingEngine, SqlToken};
///
/// let engine = SqlParsingEngine::new(DatabaseType::MySql);
/// let statement = engine.parse("SELECT * FROM t_order LIMIT 10")?;
/// assert_eq!(
///     statement.sql_tokens()[1],
///     SqlToken::RowCount { begin_position: 28, row_count: 10 }
/// );
/// # Ok::<(), sharding_sql_parser::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SqlParsingEngine {
    database_type: DatabaseType,
    dialect: &'static Dialect,
    dictionary: Dictionary,
}

impl SqlParsingEngine {
    /// Creates an engine using the dialect of `database_type`.
    #[must_use]
    pub fn new(database_type: DatabaseType) -> Self {
        Self::with_dialect(database_type, database_type.dialect())
    }

    /// Creates an engine tagged with `database_type` but parsing with
    /// `dialect`.
    #[must_use]
    pub fn with_dialect(database_type: DatabaseType, dialect: &'static Dialect) -> Self {
        Self {
            database_type,
            dialect,
            dictionary: Dictionary::new(dialect),
        }
    }

    /// The database type tag.
    #[must_use]
    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }

    /// The dialect used for parsing.
    #[must_use]
    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// Parses one statement.
    ///
    /// Tokens following a complete statement are not interpreted, but the
    /// placeholders among them still count towards the parameter index.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedToken`] if the statement does not
    /// start with `SELECT`, `INSERT`, `UPDATE` or `DELETE`, and any error
    /// raised while parsing the statement.
    pub fn parse(&self, sql: &str) -> Result<Statement, ParseError> {
        let span = tracing::debug_span!(
            target: "sharding_sql_parser::parse",
            "parse",
            database_type = %self.database_type,
            dialect = self.dialect.name,
        );
        let _entered = span.enter();

        self.parse_statement(sql)
            .inspect(|statement| {
                tracing::debug!(
                    target: "sharding_sql_parser::parse",
                    kind = %statement.keyword(),
                    tables = statement.tables().len(),
                    conditions = statement.conditions().len(),
                    sql_tokens = statement.sql_tokens().len(),
                    parameters = statement.parameters_index(),
                    "parsed statement"
                );
            })
            .inspect_err(|error| {
                tracing::debug!(target: "sharding_sql_parser::parse", %error, "parse failed");
            })
    }

    fn parse_statement(&self, sql: &str) -> Result<Statement, ParseError> {
        let mut lexer =
            LexerEngine::new(sql, &self.dictionary, self.database_type, self.dialect)?;
        match lexer.current().kind {
            TokenKind::Keyword(Keyword::Select) => SelectParser::new(self.dialect)
                .parse(&mut lexer)
                .map(Statement::Select),
            TokenKind::Keyword(Keyword::Insert) => InsertParser::new(self.dialect)
                .parse(&mut lexer)
                .map(Statement::Insert),
            TokenKind::Keyword(Keyword::Update) => UpdateParser::new(self.dialect)
                .parse(&mut lexer)
                .map(Statement::Update),
            TokenKind::Keyword(Keyword::Delete) => DeleteParser::new(self.dialect)
                .parse(&mut lexer)
                .map(Statement::Delete),
            kind => Err(ParseError::UnsupportedToken(kind)),
        }
    }
}

/// Parses `sql` with a one-off engine for `database_type`.
///
/// # Errors
///
/// See [`SqlParsingEngine::parse`].
pub fn parse(database_type: DatabaseType, sql: &str) -> Result<Statement, ParseError> {
    SqlParsingEngine::new(database_type).parse(sql)
}
