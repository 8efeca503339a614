//! Verifies the byte-level instruction encoding

use bytecode_system::disasm::{disassemble_chunk, disassemble_instruction};
use bytecode_system::memory::{grow_capacity, MIN_CAPACITY};
use bytecode_system::{Chunk, ConstantPool, ConstantPoolFull, Instruction, Opcode};
use core_types::Value;

/// Every opcode exists with its fixed byte and width
#[test]
fn test_contract_opcode_table() {
    let table = [
        (Opcode::Constant, 0u8, 2usize),
        (Opcode::ConstantLong, 1, 4),
        (Opcode::Negate, 2, 1),
        (Opcode::Add, 3, 1),
        (Opcode::Subtract, 4, 1),
        (Opcode::Multiply, 5, 1),
        (Opcode::Divide, 6, 1),
        (Opcode::Return, 7, 1),
    ];
    for (opcode, byte, width) in table {
        assert_eq!(u8::from(opcode), byte);
        assert_eq!(opcode.width(), width);
        assert_eq!(Opcode::try_from(byte), Ok(opcode));
    }
}

/// Wide loads carry a big-endian 24-bit index
#[test]
fn test_contract_wide_constant_layout() {
    assert_eq!(
        Instruction::ConstantLong(0x0A_0B_0C).to_bytes(),
        vec![1, 0x0A, 0x0B, 0x0C]
    );
}

/// Growth policy: 0, 8, then doubling
#[test]
fn test_contract_growth_policy() {
    assert_eq!(MIN_CAPACITY, 8);
    assert_eq!(grow_capacity(0), 8);
    assert_eq!(grow_capacity(8), 16);
    assert_eq!(grow_capacity(1024), 2048);
}

#[test]
fn test_contract_constant_pool() {
    let mut pool = ConstantPool::new();
    assert!(pool.is_empty());
    let index = pool.push(Value::new(4.0));
    assert_eq!(pool.get(index), Some(Value::new(4.0)));
    assert_eq!(pool.values(), &[Value::new(4.0)]);
}

#[test]
fn test_contract_pool_full_message() {
    assert_eq!(ConstantPoolFull.to_string(), "Too many constants in one chunk.");
}

#[test]
fn test_contract_disassembler_entry_points() {
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(2.0), 1).unwrap();
    chunk.write_opcode(Opcode::Return, 1);

    let (line, next) = disassemble_instruction(&chunk, 0);
    assert_eq!(next, 2);
    assert_eq!(line, "0000    1 CONSTANT         [   0]  2");

    let listing = disassemble_chunk(&chunk, "contract");
    assert!(listing.starts_with("== contract =="));
    assert!(listing.contains("RETURN"));
}
