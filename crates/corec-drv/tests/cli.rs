//! End-to-end CLI scenarios: one `assert_cmd` invocation of the real
//! binary per scenario, asserting on exit status and stdout/stderr
//! content.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn corec() -> Command {
    Command::cargo_bin("corec").expect("corec binary should build")
}

fn fixture(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create fixture file");
    file.write_all(source.as_bytes()).expect("write fixture file");
    file
}

#[test]
fn variable_declaration_compiles_successfully() {
    let file = fixture("x: i32 = 10;");
    corec().arg(file.path()).assert().success();
}

#[test]
fn function_declaration_compiles_successfully() {
    let file = fixture("fn add(a: i32, b: i32) -> i32 { return a + b; }");
    corec().arg(file.path()).assert().success();
}

#[test]
fn array_initializer_compiles_successfully() {
    let file = fixture("arr: i32[5] = { 1, 2, 3, 4, 5 };");
    corec().arg(file.path()).assert().success();
}

#[test]
fn trailing_comma_in_initializer_fails() {
    let file = fixture("arr: i32[3] = { 1, 2, 3, };");
    corec()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn braceless_if_body_fails() {
    let file = fixture("fn main() { if (1) return; }");
    corec().arg(file.path()).assert().failure().code(1);
}

#[test]
fn unbalanced_paren_fails() {
    let file = fixture("x: i32 = (1 + 2;");
    corec().arg(file.path()).assert().failure().code(1);
}

#[test]
fn top_level_bare_assignment_fails() {
    let file = fixture("x: i32 = 1; x = 2;");
    corec().arg(file.path()).assert().failure().code(1);
}

#[test]
fn duplicate_function_name_fails() {
    let file = fixture("fn f() -> i32 { return 0; } fn f() -> i32 { return 1; }");
    corec().arg(file.path()).assert().failure().code(1);
}

#[test]
fn tokens_flag_dumps_token_stream() {
    let file = fixture("x: i32 = 10;");
    corec()
        .arg("--tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier"));
}

#[test]
fn ast_flag_dumps_the_program_tree() {
    let file = fixture("x: i32 = 10;");
    corec()
        .arg("--ast")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Program"));
}

#[test]
fn sym_table_flag_dumps_bindings() {
    let file = fixture("x: i32 = 10;");
    corec()
        .arg("--sym-table")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("x : i32"));
}

#[test]
fn test_flag_runs_the_embedded_self_test_harness() {
    corec().arg("--test").assert().success();
}

#[test]
fn missing_source_file_is_a_usage_error() {
    corec().assert().failure().code(2);
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let file = fixture("x: i32 = 10;");
    corec().arg("--bogus").arg(file.path()).assert().failure().code(2);
}
