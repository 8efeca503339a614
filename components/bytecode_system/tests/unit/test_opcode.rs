//! Tests for the Opcode byte mapping

use bytecode_system::{Opcode, UnknownOpcode, MAX_CONSTANTS, MAX_SHORT_CONSTANTS};

#[test]
fn test_opcode_discriminants_are_stable() {
    assert_eq!(u8::from(Opcode::Constant), 0);
    assert_eq!(u8::from(Opcode::ConstantLong), 1);
    assert_eq!(u8::from(Opcode::Negate), 2);
    assert_eq!(u8::from(Opcode::Add), 3);
    assert_eq!(u8::from(Opcode::Subtract), 4);
    assert_eq!(u8::from(Opcode::Multiply), 5);
    assert_eq!(u8::from(Opcode::Divide), 6);
    assert_eq!(u8::from(Opcode::Return), 7);
}

#[test]
fn test_opcode_try_from_every_byte() {
    for byte in 0..=u8::MAX {
        let decoded = Opcode::try_from(byte);
        if byte <= 7 {
            assert_eq!(u8::from(decoded.unwrap()), byte);
        } else {
            assert_eq!(decoded, Err(UnknownOpcode(byte)));
        }
    }
}

#[test]
fn test_simple_opcodes_are_one_byte() {
    for opcode in [
        Opcode::Negate,
        Opcode::Add,
        Opcode::Subtract,
        Opcode::Multiply,
        Opcode::Divide,
        Opcode::Return,
    ] {
        assert_eq!(opcode.width(), 1, "{:?}", opcode);
    }
}

#[test]
fn test_constant_opcodes() {
    assert_eq!(Opcode::Constant.width(), 2);
    assert_eq!(Opcode::ConstantLong.width(), 4);
}

#[test]
fn test_opcode_names() {
    assert_eq!(Opcode::Constant.name(), "CONSTANT");
    assert_eq!(Opcode::ConstantLong.name(), "CONSTANT_LONG");
    assert_eq!(Opcode::Divide.name(), "DIVIDE");
}

#[test]
fn test_index_limits() {
    assert_eq!(MAX_SHORT_CONSTANTS, 256);
    assert_eq!(MAX_CONSTANTS, 16_777_216);
}

#[test]
fn test_unknown_opcode_message() {
    assert_eq!(UnknownOpcode(42).to_string(), "unknown opcode 42");
}
