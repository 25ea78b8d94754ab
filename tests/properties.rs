//! Property tests over generated statements.

use proptest::prelude::*;
use sharding_sql_parser::statement::LimitSource;
use sharding_sql_parser::{DatabaseType, SqlExpression, SqlParsingEngine, Statement};

/// A generated value slot: `None` is a placeholder.
fn slot() -> impl Strategy<Value = Option<u16>> {
    prop_oneof![Just(None), any::<u16>().prop_map(Some)]
}

fn render(slot: Option<u16>) -> String {
    slot.map_or_else(|| "?".to_owned(), |value| value.to_string())
}

/// Operands whose placeholders are buried in signs or composites.
const OPERANDS: &[&str] = &[
    "?",
    "-?",
    "+?",
    "-7",
    "a + ?",
    "? * -?",
    "(? - 1)",
    "concat(b, ?)",
    "-(?)",
    "'text?'",
];

#[derive(Debug, Clone)]
enum Predicate {
    /// `IN` list whose placeholder ordinals are checked one by one.
    In(Vec<Option<u16>>),
    /// Comparison against an operand from [`OPERANDS`].
    Compare(&'static str, &'static str),
}

fn predicate() -> impl Strategy<Value = Predicate> {
    prop_oneof![
        prop::collection::vec(slot(), 1..4).prop_map(Predicate::In),
        (
            prop::sample::select(&["=", ">", "<>", "LIKE"][..]),
            prop::sample::select(OPERANDS),
        )
            .prop_map(|(operator, operand)| Predicate::Compare(operator, operand)),
    ]
}

#[derive(Debug, Clone, Copy)]
enum LimitForm {
    None,
    RowCount(Option<u16>),
    Comma(Option<u16>, Option<u16>),
    Offset(Option<u16>, Option<u16>),
}

fn limit_form() -> impl Strategy<Value = LimitForm> {
    prop_oneof![
        Just(LimitForm::None),
        slot().prop_map(LimitForm::RowCount),
        (slot(), slot()).prop_map(|(offset, row_count)| LimitForm::Comma(offset, row_count)),
        (slot(), slot()).prop_map(|(row_count, offset)| LimitForm::Offset(row_count, offset)),
    ]
}

fn placeholders(text: &str) -> usize {
    let mut in_string = false;
    text.chars()
        .filter(|&c| {
            if c == '\'' {
                in_string = !in_string;
            }
            c == '?' && !in_string
        })
        .count()
}

fn render_where(predicates: &[Predicate]) -> String {
    let rendered: Vec<String> = predicates
        .iter()
        .enumerate()
        .map(|(column, predicate)| match predicate {
            Predicate::In(values) => {
                let values: Vec<String> = values.iter().copied().map(render).collect();
                format!("c{column} IN ({})", values.join(", "))
            }
            Predicate::Compare(operator, operand) => format!("c{column} {operator} {operand}"),
        })
        .collect();
    rendered.join(" AND ")
}

/// Checks the ordinals of `IN` placeholders, starting at `next`, and
/// returns the ordinal following the last placeholder of the clause.
fn check_where(
    statement: &Statement,
    predicates: &[Predicate],
    mut next: usize,
) -> Result<usize, TestCaseError> {
    for (column, predicate) in predicates.iter().enumerate() {
        match predicate {
            Predicate::In(values) => {
                let condition = statement
                    .conditions()
                    .find("t_order", &format!("c{column}"))
                    .unwrap();
                for (slot, value) in values.iter().zip(&condition.values) {
                    if slot.is_none() {
                        prop_assert_eq!(value, &SqlExpression::Placeholder(next));
                        next += 1;
                    }
                }
            }
            Predicate::Compare(_, operand) => next += placeholders(operand),
        }
    }
    Ok(next)
}

fn check_limit_slot(
    slot: Option<u16>,
    source: LimitSource,
    next: &mut usize,
) -> Result<(), TestCaseError> {
    match slot {
        None => {
            prop_assert_eq!(source, LimitSource::Parameter(*next));
            *next += 1;
        }
        Some(literal) => prop_assert_eq!(source, LimitSource::Literal(i64::from(literal))),
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_select_placeholders_follow_source_order(
        predicates in prop::collection::vec(predicate(), 1..5),
        limit in limit_form(),
    ) {
        let limit_clause = match limit {
            LimitForm::None => String::new(),
            LimitForm::RowCount(row_count) => format!(" LIMIT {}", render(row_count)),
            LimitForm::Comma(offset, row_count) => {
                format!(" LIMIT {}, {}", render(offset), render(row_count))
            }
            LimitForm::Offset(row_count, offset) => {
                format!(" LIMIT {} OFFSET {}", render(row_count), render(offset))
            }
        };
        let sql = format!(
            "SELECT * FROM t_order WHERE {}{limit_clause}",
            render_where(&predicates),
        );

        let statement = SqlParsingEngine::new(DatabaseType::MySql).parse(&sql).unwrap();

        let mut next = check_where(&statement, &predicates, 0)?;
        let parsed = statement.limit();
        match limit {
            LimitForm::None => prop_assert!(parsed.is_none()),
            LimitForm::RowCount(row_count) => {
                let parsed = parsed.unwrap();
                prop_assert!(parsed.offset.is_none());
                check_limit_slot(row_count, parsed.row_count.unwrap().source, &mut next)?;
            }
            LimitForm::Comma(offset, row_count) => {
                let parsed = parsed.unwrap();
                check_limit_slot(offset, parsed.offset.unwrap().source, &mut next)?;
                check_limit_slot(row_count, parsed.row_count.unwrap().source, &mut next)?;
            }
            LimitForm::Offset(row_count, offset) => {
                let parsed = parsed.unwrap();
                check_limit_slot(row_count, parsed.row_count.unwrap().source, &mut next)?;
                check_limit_slot(offset, parsed.offset.unwrap().source, &mut next)?;
            }
        }
        prop_assert_eq!(statement.parameters_index(), next);
        prop_assert_eq!(next, placeholders(&sql));
    }

    #[test]
    fn prop_update_placeholders_follow_source_order(
        values in prop::collection::vec(prop::sample::select(OPERANDS), 1..4),
        predicates in prop::collection::vec(predicate(), 1..4),
    ) {
        let assignments: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(column, value)| format!("s{column} = {value}"))
            .collect();
        let sql = format!(
            "UPDATE t_order SET {} WHERE {}",
            assignments.join(", "),
            render_where(&predicates),
        );

        let statement = SqlParsingEngine::new(DatabaseType::MySql).parse(&sql).unwrap();

        prop_assert_eq!(statement.as_update().unwrap().assignments.len(), values.len());
        let first = values.iter().copied().map(placeholders).sum();
        let next = check_where(&statement, &predicates, first)?;
        prop_assert_eq!(statement.parameters_index(), next);
        prop_assert_eq!(next, placeholders(&sql));
    }

    #[test]
    fn prop_parsing_is_idempotent(tail in "[a-z0-9_ ,().?=*'<>+-]{0,80}") {
        let engine = SqlParsingEngine::new(DatabaseType::MySql);
        for sql in [format!("SELECT {tail}"), format!("DELETE FROM t {tail}")] {
            prop_assert_eq!(engine.parse(&sql), engine.parse(&sql));
        }
    }
}
