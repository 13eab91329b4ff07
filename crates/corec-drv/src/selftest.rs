//! The `--test` self-test harness: runs a fixed set of parser fixtures
//! through temporary files. Each fixture is a small source snippet with
//! an expected outcome; it is
//! written to a real temporary file so the harness exercises the same
//! `SourceFile::load` path a real invocation does, not an in-memory
//! shortcut.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::pipeline::run_pipeline;

struct Fixture {
    name: &'static str,
    source: &'static str,
    expect_success: bool,
}

const FIXTURES: &[Fixture] = &[
    Fixture { name: "variable_decl", source: "x: i32 = 10;", expect_success: true },
    Fixture {
        name: "function_decl",
        source: "fn add(a: i32, b: i32) -> i32 { return a + b; }",
        expect_success: true,
    },
    Fixture {
        name: "array_initializer",
        source: "arr: i32[5] = { 1, 2, 3, 4, 5 };",
        expect_success: true,
    },
    Fixture {
        name: "trailing_comma_in_initializer",
        source: "arr: i32[3] = { 1, 2, 3, };",
        expect_success: false,
    },
    Fixture {
        name: "braceless_if_body",
        source: "fn main() { if (1) return; }",
        expect_success: false,
    },
    Fixture { name: "unbalanced_paren", source: "x: i32 = (1 + 2;", expect_success: false },
    Fixture {
        name: "top_level_bare_assignment",
        source: "x: i32 = 1; x = 2;",
        expect_success: false,
    },
    Fixture {
        name: "duplicate_function_name",
        source: "fn f() -> i32 { return 0; } fn f() -> i32 { return 1; }",
        expect_success: false,
    },
];

/// Runs every fixture through the real pipeline via a temporary file and
/// prints a pass/fail line per fixture. Returns `true` iff all fixtures
/// matched their expected outcome.
pub fn run_self_test() -> bool {
    let mut all_passed = true;
    for fixture in FIXTURES {
        let mut file = NamedTempFile::new().expect("create temp fixture file");
        file.write_all(fixture.source.as_bytes()).expect("write temp fixture file");

        let source = std::fs::read_to_string(file.path()).expect("read back temp fixture file");
        let filename = file.path().display().to_string();
        let succeeded = run_pipeline(&source, &filename).is_ok();

        let passed = succeeded == fixture.expect_success;
        all_passed &= passed;
        println!(
            "{} {} (expected {})",
            if passed { "ok  " } else { "FAIL" },
            fixture.name,
            if fixture.expect_success { "success" } else { "failure" },
        );
    }
    all_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fixtures_match_their_expected_outcome() {
        assert!(run_self_test());
    }
}
