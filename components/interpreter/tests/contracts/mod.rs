//! Contract tests for interpreter API
//!
//! These tests verify the public API matches the contract specification.

use bytecode_system::{Chunk, Opcode};
use core_types::{InterpretError, RuntimeError, Value};
use interpreter::{interpret, VM};

/// VM::run borrows the chunk and returns the popped value
#[test]
fn test_vm_run_contract() {
    let mut vm = VM::new();
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(42.0), 1).unwrap();
    chunk.write_opcode(Opcode::Return, 1);

    let result: Result<Value, RuntimeError> = vm.run(&chunk);
    assert_eq!(result, Ok(Value::new(42.0)));
    assert_eq!(chunk.len(), 3);
}

/// VM::interpret gives the three-way outcome
#[test]
fn test_vm_interpret_outcomes() {
    let mut vm = VM::new();

    let ok: Result<Value, InterpretError> = vm.interpret("2 * 21");
    assert_eq!(ok.unwrap(), Value::new(42.0));

    let compile = vm.interpret("2 *").unwrap_err();
    assert!(matches!(compile, InterpretError::Compile(_)));
}

/// Runtime failures surface as InterpretError::Runtime through `?`
#[test]
fn test_runtime_error_converts() {
    fn run_empty() -> Result<Value, InterpretError> {
        Ok(VM::new().run(&Chunk::new())?)
    }
    assert!(matches!(run_empty(), Err(InterpretError::Runtime(_))));
}

/// The free function matches a fresh VM
#[test]
fn test_interpret_free_function() {
    assert_eq!(interpret("10 - 2 - 3").unwrap(), Value::new(5.0));
}

/// Builder-style tracing toggle
#[test]
fn test_vm_trace_builder() {
    let mut vm = VM::new().with_trace(true);
    vm.set_trace(false);
    assert_eq!(vm.interpret("1").unwrap(), Value::new(1.0));
}
