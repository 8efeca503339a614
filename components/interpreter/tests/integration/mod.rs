//! Integration tests for interpreter
//!
//! Tests the compiler and VM together on whole expressions

use core_types::{InterpretError, Value};
use interpreter::VM;

fn eval(vm: &mut VM, source: &str) -> Value {
    vm.interpret(source).unwrap()
}

#[test]
fn test_vm_complex_arithmetic() {
    let mut vm = VM::new();
    // (10 + 5) * 3 - 2 = 43
    assert_eq!(eval(&mut vm, "(10 + 5) * 3 - 2"), Value::new(43.0));
}

#[test]
fn test_vm_fractional_results() {
    let mut vm = VM::new();
    assert_eq!(eval(&mut vm, "1 / 4").to_string(), "0.25");
    assert_eq!(eval(&mut vm, "0.1 + 0.2").as_number(), 0.1 + 0.2);
}

#[test]
fn test_vm_deep_nesting_grows_stack() {
    // 1 + (1 + (1 + ... )) keeps every left operand live
    let depth = 40;
    let source = format!("{}1{}", "1 + (".repeat(depth), ")".repeat(depth));

    let mut vm = VM::new();
    assert_eq!(eval(&mut vm, &source), Value::new((depth + 1) as f64));
    assert!(vm.stack_capacity() >= 64);
}

#[test]
fn test_vm_stack_storage_is_reused() {
    let mut vm = VM::new();
    let deep = format!("{}1{}", "2 * (".repeat(20), ")".repeat(20));
    eval(&mut vm, &deep);
    let capacity = vm.stack_capacity();

    assert_eq!(eval(&mut vm, "1 + 1"), Value::new(2.0));
    assert_eq!(vm.stack_capacity(), capacity);
}

#[test]
fn test_vm_repeated_runs_agree() {
    let mut vm = VM::new();
    let source = "-(3 - 10) * 2 / 7";
    let first = eval(&mut vm, source);
    let second = eval(&mut vm, source);
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(first, Value::new(2.0));
}

#[test]
fn test_vm_comments_and_lines() {
    let mut vm = VM::new();
    let source = "// header\n\n  // more\n1 +\n// middle\n2";
    assert_eq!(eval(&mut vm, source), Value::new(3.0));
}

#[test]
fn test_vm_unterminated_string_not_executed() {
    let mut vm = VM::new();
    match vm.interpret("\"abc") {
        Err(InterpretError::Compile(err)) => {
            assert_eq!(err.first_line(), Some(1));
        }
        other => panic!("expected compile error, got {:?}", other),
    }
}
