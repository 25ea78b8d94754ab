//! Benchmark measuring statement parsing through [`SqlParsingEngine`].
//!
//! Covers one representative statement per kind, then multi-row inserts of
//! growing size to show how parsing scales with the number of rows.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sharding_sql_parser::{DatabaseType, SqlParsingEngine};
use std::fmt::Write;
use std::hint::black_box;

const SELECT: &str = "SELECT o.order_id, o.status, AVG(i.price) AS avg_price \
    FROM t_order o JOIN t_order_item i ON o.order_id = i.order_id \
    WHERE o.user_id = ? AND o.order_id IN (?, ?, ?) AND i.created BETWEEN ? AND ? \
    GROUP BY o.order_id ORDER BY o.created DESC LIMIT ?, 20";
const INSERT: &str = "INSERT INTO t_order (order_id, user_id, status) VALUES (?, ?, 'new') \
    ON DUPLICATE KEY UPDATE status = VALUES(status)";
const UPDATE: &str = "UPDATE t_order SET status = ?, updated = NOW() WHERE order_id = ? AND user_id = ?";
const DELETE: &str = "DELETE LOW_PRIORITY FROM t_order WHERE user_id = 10 AND status <> 'done'";

fn benchmark_statements(c: &mut Criterion) {
    let engine = SqlParsingEngine::new(DatabaseType::MySql);
    let mut group = c.benchmark_group("parse_statement");

    for (name, sql) in [
        ("select", SELECT),
        ("insert", INSERT),
        ("update", UPDATE),
        ("delete", DELETE),
    ] {
        group.throughput(Throughput::Bytes(sql.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| black_box(engine.parse(black_box(sql)).unwrap()));
        });
    }

    group.finish();
}

fn multi_row_insert(rows: usize) -> String {
    let mut sql = String::from("INSERT INTO t_order (order_id, user_id, status) VALUES ");
    for row in 0..rows {
        if row > 0 {
            sql.push_str(", ");
        }
        write!(sql, "({row}, ?, 'status_{row}')").unwrap();
    }
    sql
}

fn benchmark_insert_rows(c: &mut Criterion) {
    let engine = SqlParsingEngine::new(DatabaseType::MySql);
    let mut group = c.benchmark_group("parse_insert_rows");

    for rows in [1, 10, 100, 1000] {
        let sql = multi_row_insert(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &sql, |b, sql| {
            b.iter(|| black_box(engine.parse(black_box(sql)).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_engine_setup(c: &mut Criterion) {
    c.bench_function("engine_new", |b| {
        b.iter(|| black_box(SqlParsingEngine::new(black_box(DatabaseType::MySql))));
    });
}

criterion_group!(
    benches,
    benchmark_statements,
    benchmark_insert_rows,
    benchmark_engine_setup,
);
criterion_main!(benches);
