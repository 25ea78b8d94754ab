//! Fuzzer for the parsing engine.
//!
//! Every successful parse must be reproducible and carry rewrite tokens that
//! point at their text.

use honggfuzz::fuzz;
use sharding_sql_parser::DatabaseType;
use sharding_sql_parser::testing::check_parse;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(sql) = std::str::from_utf8(data) {
                check_parse(DatabaseType::MySql, sql);
            }
        });
    }
}
