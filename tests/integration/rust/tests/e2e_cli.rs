//! End-to-end tests through the CLI runtime

use cypsa_cli::{Cli, Mode, Runtime};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_execution_workflow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("calc.cy");
    fs::write(&path, "// compute\n(1 + 2) * 3\n").unwrap();

    let cli = Cli::with_file(path.to_str().unwrap());
    let mut runtime = Runtime::new()
        .with_print_bytecode(cli.print_bytecode)
        .with_trace(cli.trace);

    let Mode::File(file) = cli.mode() else {
        panic!("expected file mode");
    };
    let result = runtime.execute_file(&file).unwrap();
    assert_eq!(result.to_string(), "9");
}

#[test]
fn test_eval_prints_compact_numbers() {
    let mut runtime = Runtime::new();
    assert_eq!(runtime.execute_string("1 / 8").unwrap().to_string(), "0.125");
    assert_eq!(runtime.execute_string("-10 / 2").unwrap().to_string(), "-5");
}

#[test]
fn test_exit_codes_by_failure() {
    let mut runtime = Runtime::new();
    assert_eq!(runtime.execute_string("(").unwrap_err().exit_code(), 65);
    assert_eq!(runtime.execute_file("/nonexistent/path.cy").unwrap_err().exit_code(), 74);
}

#[test]
fn test_token_dump_matches_lexer() {
    let listing = Runtime::token_listing("(1)\n// c\n-2");
    assert_eq!(listing.lines().count(), 6);
    assert!(listing.contains("LParen"));
    assert!(listing.lines().last().unwrap().contains("EOF"));
}

#[test]
fn test_token_dump_without_source_is_usage_error() {
    let cli = Cli {
        tokens: true,
        ..Cli::default()
    };
    let err = Runtime::tokens_for(&cli.mode()).unwrap_err();
    assert_eq!(err.exit_code(), 64);

    let cli = Cli {
        tokens: true,
        ..Cli::with_eval("1 + 2")
    };
    assert!(Runtime::tokens_for(&cli.mode()).unwrap().contains("Plus"));
}
