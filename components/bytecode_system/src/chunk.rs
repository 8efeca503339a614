//! Bytecode chunk - compiled bytecode container
//!
//! A chunk is an append-only byte sequence with one source line recorded per
//! byte, plus the constant pool its loads refer to.

use core_types::Value;
use thiserror::Error;

use crate::constants::ConstantPool;
use crate::instruction::Instruction;
use crate::memory::{grow_capacity, reserve_to};
use crate::opcode::{Opcode, MAX_CONSTANTS};

/// The constant pool has no index left that a load instruction can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Too many constants in one chunk.")]
pub struct ConstantPoolFull;

/// A compiled bytecode chunk
///
/// `code` and `lines` always have the same length: `lines[i]` is the source
/// line of the token that produced `code[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
    code: Vec<u8>,
    lines: Vec<usize>,
    capacity: usize,
    constants: ConstantPool,
}

impl Chunk {
    /// Create a new empty chunk
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one byte tagged with its source line
    pub fn write(&mut self, byte: u8, line: usize) {
        if self.code.len() == self.capacity {
            self.capacity = grow_capacity(self.capacity);
            reserve_to(&mut self.code, self.capacity);
            reserve_to(&mut self.lines, self.capacity);
        }
        self.code.push(byte);
        self.lines.push(line);
    }

    /// Append a single opcode byte
    pub fn write_opcode(&mut self, opcode: Opcode, line: usize) {
        self.write(u8::from(opcode), line);
    }

    /// Append every byte of an encoded instruction
    pub fn write_instruction(&mut self, instruction: Instruction, line: usize) {
        for byte in instruction.to_bytes() {
            self.write(byte, line);
        }
    }

    /// Add a constant to the pool and return its index
    ///
    /// No load instruction is written; see [`Chunk::write_constant`].
    pub fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value)
    }

    /// Add a constant and write the instruction that loads it.
    ///
    /// Indices below 256 use the two-byte `Constant` form, larger ones the
    /// four-byte `ConstantLong` form. Fails without touching the chunk once
    /// the pool holds 2^24 constants.
    ///
    /// # Returns
    ///
    /// The pool index of the new constant
    pub fn write_constant(&mut self, value: Value, line: usize) -> Result<usize, ConstantPoolFull> {
        if self.constants.len() >= MAX_CONSTANTS {
            return Err(ConstantPoolFull);
        }

        let index = self.add_constant(value);
        let instruction = Instruction::load_constant(index).ok_or(ConstantPoolFull)?;
        self.write_instruction(instruction, line);
        Ok(index)
    }

    /// The instruction bytes
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Source line of every byte in [`Chunk::code`]
    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Check if no bytes have been written
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Logical capacity of the code and line arrays
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The constant pool
    pub fn constants(&self) -> &ConstantPool {
        &self.constants
    }

    /// Source line of the byte at `offset`
    pub fn line_at(&self, offset: usize) -> Option<usize> {
        self.lines.get(offset).copied()
    }

    /// Byte at `offset`
    pub fn read_byte(&self, offset: usize) -> Option<u8> {
        self.code.get(offset).copied()
    }
}
