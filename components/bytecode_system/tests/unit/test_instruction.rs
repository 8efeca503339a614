//! Tests for instruction decoding

use bytecode_system::{
    decode_long_index, encode_long_index, Chunk, DecodeError, Instruction, Opcode,
};
use core_types::Value;

fn decode_all(code: &[u8]) -> Vec<Instruction> {
    let mut offset = 0;
    let mut out = Vec::new();
    while offset < code.len() {
        let (instruction, next) = Instruction::decode(code, offset).unwrap();
        out.push(instruction);
        offset = next;
    }
    out
}

#[test]
fn test_decode_sequence() {
    let mut chunk = Chunk::new();
    chunk.write_constant(Value::new(1.0), 1).unwrap();
    chunk.write_constant(Value::new(2.0), 1).unwrap();
    chunk.write_opcode(Opcode::Add, 1);
    chunk.write_opcode(Opcode::Return, 1);

    assert_eq!(
        decode_all(chunk.code()),
        vec![
            Instruction::Constant(0),
            Instruction::Constant(1),
            Instruction::Add,
            Instruction::Return,
        ]
    );
}

#[test]
fn test_instruction_encode_matches_decode() {
    let instructions = [
        Instruction::Constant(200),
        Instruction::ConstantLong(70_000),
        Instruction::Negate,
        Instruction::Subtract,
        Instruction::Multiply,
        Instruction::Return,
    ];

    let mut code = Vec::new();
    for instruction in &instructions {
        let bytes = instruction.to_bytes();
        assert_eq!(bytes.len(), instruction.width());
        code.extend(bytes);
    }

    assert_eq!(decode_all(&code), instructions.to_vec());
}

#[test]
fn test_long_index_boundaries() {
    assert_eq!(encode_long_index(0), [0, 0, 0]);
    assert_eq!(encode_long_index(256), [0, 1, 0]);
    assert_eq!(encode_long_index(0xFF_FF_FF), [0xFF, 0xFF, 0xFF]);
    assert_eq!(decode_long_index(0xFF, 0xFF, 0xFF), 0xFF_FF_FF);
}

#[test]
fn test_constant_index_accessor() {
    assert_eq!(Instruction::Constant(3).constant_index(), Some(3));
    assert_eq!(Instruction::ConstantLong(300).constant_index(), Some(300));
    assert_eq!(Instruction::Add.constant_index(), None);
}

#[test]
fn test_decode_error_messages() {
    let err = Instruction::decode(&[0], 0).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Truncated {
            opcode: Opcode::Constant,
            offset: 0
        }
    );
    assert_eq!(err.to_string(), "truncated CONSTANT at offset 0000");
}
