//! Unit tests for the error types

use core_types::{CompileError, Diagnostic, ErrorKind, ErrorLocation, InterpretError, RuntimeError};

#[test]
fn test_lexical_diagnostic_has_no_location() {
    let diagnostic = Diagnostic {
        kind: ErrorKind::LexicalError,
        line: 1,
        location: ErrorLocation::Unspecified,
        message: "Unexpected character.".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "[line 1] Error: Unexpected character.");
}

#[test]
fn test_empty_compile_error_has_no_first_line() {
    let err = CompileError { diagnostics: vec![] };
    assert_eq!(err.first_line(), None);
    assert_eq!(err.to_string(), "");
}

#[test]
fn test_runtime_error_variants_display() {
    let underflow = RuntimeError::StackUnderflow { offset: 12, line: 2 };
    assert_eq!(
        underflow.to_string(),
        "[line 2] Runtime error: stack underflow at offset 0012"
    );

    let truncated = RuntimeError::TruncatedInstruction { offset: 0, line: 1 };
    assert!(truncated.to_string().contains("truncated instruction"));

    let out_of_range = RuntimeError::ConstantOutOfRange {
        index: 300,
        offset: 4,
        line: 1,
    };
    assert!(out_of_range.to_string().contains("constant index 300"));

    let missing = RuntimeError::MissingReturn { offset: 5 };
    assert!(missing.to_string().contains("without a return"));
}

#[test]
fn test_interpret_error_is_transparent() {
    let runtime = RuntimeError::StackUnderflow { offset: 0, line: 1 };
    let err = InterpretError::from(runtime.clone());
    assert_eq!(err.to_string(), runtime.to_string());
}
