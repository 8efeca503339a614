//! Bytecode to Interpreter Integration Tests
//!
//! Tests the integration between bytecode_system and interpreter components.
//! Verifies that bytecode instructions are correctly executed by the VM.

use bytecode_system::{Chunk, Instruction, Opcode};
use core_types::{RuntimeError, Value};
use interpreter::VM;

/// Test: Execute Constant and Return
#[test]
fn test_execute_load_constant_number() {
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(42.0), 1).unwrap();
    chunk.write_opcode(Opcode::Return, 1);

    let mut vm = VM::new();
    assert_eq!(vm.run(&chunk).unwrap(), Value::new(42.0));
}

/// Test: Execute subtraction order
#[test]
fn test_execute_subtraction_order() {
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(10.0), 1).unwrap();
    chunk.write_constant(Value::new(32.0), 1).unwrap();
    chunk.write_opcode(Opcode::Subtract, 1);
    chunk.write_opcode(Opcode::Return, 1);

    assert_eq!(VM::new().run(&chunk).unwrap(), Value::new(-22.0));
}

/// Test: Hand-built wide loads run like compact ones
#[test]
fn test_execute_wide_and_compact_mix() {
    let mut chunk = Chunk::new();
    for i in 0..260 {
        chunk.add_constant(Value::new(i as f64));
    }
    chunk.write_instruction(Instruction::Constant(2), 1);
    chunk.write_instruction(Instruction::ConstantLong(259), 1);
    chunk.write_opcode(Opcode::Multiply, 1);
    chunk.write_opcode(Opcode::Return, 1);

    assert_eq!(VM::new().run(&chunk).unwrap(), Value::new(518.0));
}

/// Test: Return stops execution even with bytes after it
#[test]
fn test_return_halts() {
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(1.0), 1).unwrap();
    chunk.write_opcode(Opcode::Return, 1);
    chunk.write(0xFF, 2);

    assert_eq!(VM::new().run(&chunk).unwrap(), Value::new(1.0));
}

/// Test: Runtime errors carry the line of the failing instruction
#[test]
fn test_runtime_error_lines() {
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(1.0), 1).unwrap();
    chunk.write(0x42, 7);

    let err = VM::new().run(&chunk).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::UnknownOpcode {
            opcode: 0x42,
            offset: 2,
            line: 7
        }
    );
    assert_eq!(
        err.to_string(),
        "[line 7] Runtime error: unknown opcode 66 at offset 0002"
    );
}
