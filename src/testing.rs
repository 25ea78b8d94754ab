//! Invariant checks shared by the fuzz target and the regression tests.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`check_parse`]: parse arbitrary SQL and assert every output invariant
//! - [`check_sql_tokens`]: assert that rewrite tokens point at what they name

use crate::{DatabaseType, SqlParsingEngine, SqlToken, Statement};

/// Parses `sql` twice and checks the result.
///
/// Parse errors are fine. A successful parse must be reproducible and its
/// rewrite tokens must be consistent with the SQL text.
///
/// # Panics
///
/// Panics if an invariant does not hold.
pub fn check_parse(database_type: DatabaseType, sql: &str) {
    let engine = SqlParsingEngine::new(database_type);
    let first = engine.parse(sql);
    let second = engine.parse(sql);
    assert_eq!(first, second, "parsing {sql:?} twice differs");
    let Ok(statement) = first else {
        return;
    };
    assert!(
        statement.parameters_index() <= sql.matches('?').count(),
        "{sql:?} consumed more placeholders than it contains"
    );
    check_sql_tokens(sql, &statement);
}

/// Checks token order and that table and limit tokens start at the text
/// they carry.
///
/// Tokens other than the limit ones are sorted by begin position. The limit
/// tokens come last, offset first.
///
/// # Panics
///
/// Panics if a token is out of order or misplaced.
pub fn check_sql_tokens(sql: &str, statement: &Statement) {
    let tokens = statement.sql_tokens();
    let is_limit = |token: &SqlToken| {
        matches!(token, SqlToken::Offset { .. } | SqlToken::RowCount { .. })
    };
    let split = tokens.partition_point(|token| !is_limit(token));
    let (others, limits) = tokens.split_at(split);
    assert!(
        others
            .windows(2)
            .all(|pair| pair[0].begin_position() <= pair[1].begin_position()),
        "tokens of {sql:?} are not sorted: {tokens:?}"
    );
    assert!(
        limits.iter().all(is_limit)
            && !matches!(limits, [SqlToken::RowCount { .. }, SqlToken::Offset { .. }]),
        "limit tokens of {sql:?} are misplaced: {tokens:?}"
    );
    for token in tokens {
        let begin_position = token.begin_position();
        let rest = sql
            .get(begin_position..)
            .unwrap_or_else(|| panic!("{token:?} is outside of {sql:?}"));
        match token {
            SqlToken::Table {
                original_literals, ..
            } => assert!(
                rest.starts_with(original_literals.as_str()),
                "{token:?} does not point at its table in {sql:?}"
            ),
            SqlToken::Offset { offset: value, .. }
            | SqlToken::RowCount {
                row_count: value, ..
            } => {
                let digits = rest
                    .split(|c: char| !c.is_ascii_digit())
                    .next()
                    .unwrap_or_default();
                assert_eq!(
                    digits.parse::<i64>().ok(),
                    Some(*value),
                    "{token:?} does not point at its literal in {sql:?}"
                );
            }
            SqlToken::Items { .. } | SqlToken::OrderBy { .. } | SqlToken::InsertValues { .. } => {}
        }
    }
}
