//! Bytecode opcodes for the Cypsa virtual machine
//!
//! Each opcode is a single byte and fixes the total size of its instruction.

use thiserror::Error;

/// Number of pool entries addressable by the compact [`Opcode::Constant`] form.
pub const MAX_SHORT_CONSTANTS: usize = 1 << 8;

/// Number of pool entries addressable by the wide [`Opcode::ConstantLong`] form.
pub const MAX_CONSTANTS: usize = 1 << 24;

/// Bytecode opcodes for the stack machine
///
/// The discriminants are the encoded byte values and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Push a constant; one operand byte holds the pool index
    Constant = 0,
    /// Push a constant; three operand bytes hold a big-endian pool index
    ConstantLong = 1,
    /// Negate the top stack value in place
    Negate = 2,
    /// Add top two stack values
    Add = 3,
    /// Subtract top from second-top
    Subtract = 4,
    /// Multiply top two stack values
    Multiply = 5,
    /// Divide second-top by top
    Divide = 6,
    /// Pop the top value and halt with it as the result
    Return = 7,
}

/// A byte that does not name any opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown opcode {0}")]
pub struct UnknownOpcode(pub u8);

impl Opcode {
    /// Total instruction size in bytes, opcode included.
    pub const fn width(self) -> usize {
        match self {
            Opcode::Constant => 2,
            Opcode::ConstantLong => 4,
            Opcode::Negate
            | Opcode::Add
            | Opcode::Subtract
            | Opcode::Multiply
            | Opcode::Divide
            | Opcode::Return => 1,
        }
    }

    /// Mnemonic used by the disassembler.
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Constant => "CONSTANT",
            Opcode::ConstantLong => "CONSTANT_LONG",
            Opcode::Negate => "NEGATE",
            Opcode::Add => "ADD",
            Opcode::Subtract => "SUBTRACT",
            Opcode::Multiply => "MULTIPLY",
            Opcode::Divide => "DIVIDE",
            Opcode::Return => "RETURN",
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        opcode as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = UnknownOpcode;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0 => Ok(Opcode::Constant),
            1 => Ok(Opcode::ConstantLong),
            2 => Ok(Opcode::Negate),
            3 => Ok(Opcode::Add),
            4 => Ok(Opcode::Subtract),
            5 => Ok(Opcode::Multiply),
            6 => Ok(Opcode::Divide),
            7 => Ok(Opcode::Return),
            other => Err(UnknownOpcode(other)),
        }
    }
}
