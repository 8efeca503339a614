//! Bytecode instruction representation
//!
//! Decodes one instruction at a time from a chunk's byte stream and encodes
//! instructions back into bytes. The encoding is:
//!
//! | Opcode | Size | Operand |
//! |---|---|---|
//! | `Constant` | 2 | 1-byte pool index |
//! | `ConstantLong` | 4 | 3-byte big-endian pool index |
//! | everything else | 1 | none |

use thiserror::Error;

use crate::opcode::{Opcode, MAX_CONSTANTS};

/// Split a pool index into the three operand bytes of a wide constant load.
///
/// Only the low 24 bits are kept; callers check the index against
/// [`MAX_CONSTANTS`] first.
pub fn encode_long_index(index: usize) -> [u8; 3] {
    [
        ((index >> 16) & 0xFF) as u8,
        ((index >> 8) & 0xFF) as u8,
        (index & 0xFF) as u8,
    ]
}

/// Rebuild a pool index from the three operand bytes of a wide constant load.
pub fn decode_long_index(high: u8, mid: u8, low: u8) -> usize {
    ((high as usize) << 16) | ((mid as usize) << 8) | (low as usize)
}

/// Errors produced while decoding bytes into an [`Instruction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The offset is not inside the code
    #[error("offset {offset:04} is past the end of the code")]
    OutOfBounds {
        /// Requested offset
        offset: usize,
    },
    /// The byte at the offset is not an opcode
    #[error("unknown opcode {opcode} at offset {offset:04}")]
    UnknownOpcode {
        /// The unrecognised byte
        opcode: u8,
        /// Offset of the byte
        offset: usize,
    },
    /// The code ends before all operand bytes
    #[error("truncated {} at offset {offset:04}", .opcode.name())]
    Truncated {
        /// The opcode whose operands are missing
        opcode: Opcode,
        /// Offset of the opcode
        offset: usize,
    },
}

/// A single decoded bytecode instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Load constant through a compact index
    Constant(u8),
    /// Load constant through a wide (24-bit) index
    ConstantLong(u32),
    /// Negate top value
    Negate,
    /// Add top two values
    Add,
    /// Subtract top from second-top
    Subtract,
    /// Multiply top two values
    Multiply,
    /// Divide second-top by top
    Divide,
    /// Halt with the top value
    Return,
}

impl Instruction {
    /// Build the constant-load instruction for a pool index, choosing the
    /// compact form whenever the index fits in one byte.
    ///
    /// Returns `None` when the index is beyond the 24-bit range.
    pub fn load_constant(index: usize) -> Option<Self> {
        if let Ok(short) = u8::try_from(index) {
            Some(Instruction::Constant(short))
        } else if index < MAX_CONSTANTS {
            Some(Instruction::ConstantLong(index as u32))
        } else {
            None
        }
    }

    /// The opcode this instruction is encoded with
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Constant(_) => Opcode::Constant,
            Instruction::ConstantLong(_) => Opcode::ConstantLong,
            Instruction::Negate => Opcode::Negate,
            Instruction::Add => Opcode::Add,
            Instruction::Subtract => Opcode::Subtract,
            Instruction::Multiply => Opcode::Multiply,
            Instruction::Divide => Opcode::Divide,
            Instruction::Return => Opcode::Return,
        }
    }

    /// Encoded size in bytes
    pub fn width(&self) -> usize {
        self.opcode().width()
    }

    /// Pool index referenced by a constant load
    pub fn constant_index(&self) -> Option<usize> {
        match self {
            Instruction::Constant(index) => Some(*index as usize),
            Instruction::ConstantLong(index) => Some(*index as usize),
            _ => None,
        }
    }

    /// Encode to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width());
        bytes.push(u8::from(self.opcode()));
        match self {
            Instruction::Constant(index) => bytes.push(*index),
            Instruction::ConstantLong(index) => {
                bytes.extend_from_slice(&encode_long_index(*index as usize))
            }
            _ => {}
        }
        bytes
    }

    /// Decode the instruction starting at `offset`.
    ///
    /// Returns the instruction and the offset of the one after it.
    pub fn decode(code: &[u8], offset: usize) -> Result<(Self, usize), DecodeError> {
        let byte = *code.get(offset).ok_or(DecodeError::OutOfBounds { offset })?;
        let opcode = Opcode::try_from(byte)
            .map_err(|_| DecodeError::UnknownOpcode { opcode: byte, offset })?;

        let next = offset + opcode.width();
        let operands = code
            .get(offset + 1..next)
            .ok_or(DecodeError::Truncated { opcode, offset })?;

        let instruction = match opcode {
            Opcode::Constant => Instruction::Constant(operands[0]),
            Opcode::ConstantLong => Instruction::ConstantLong(
                decode_long_index(operands[0], operands[1], operands[2]) as u32,
            ),
            Opcode::Negate => Instruction::Negate,
            Opcode::Add => Instruction::Add,
            Opcode::Subtract => Instruction::Subtract,
            Opcode::Multiply => Instruction::Multiply,
            Opcode::Divide => Instruction::Divide,
            Opcode::Return => Instruction::Return,
        };

        Ok((instruction, next))
    }
}
