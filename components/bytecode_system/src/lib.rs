//! Bytecode system for the Cypsa interpreter
//!
//! This crate provides the instruction set, its byte-level encoding, and the
//! append-only [`Chunk`] container that the compiler fills and the virtual
//! machine executes.
//!
//! # Features
//!
//! - Stack-machine instruction set with 1-, 2- and 4-byte instructions
//! - Compact (8-bit) and wide (24-bit big-endian) constant-pool indices
//! - Per-byte source line tracking for diagnostics
//! - A disassembler for debugging output
//!
//! # Example
//!
//! ```
//! use bytecode_system::{Chunk, Instruction, Opcode};
//! use core_types::Value;
//!
//! let mut chunk = Chunk::new();
//!
//! // Constants are pooled and referenced by index
//! chunk.write_constant(Value::new(1.5), 1).unwrap();
//! chunk.write_opcode(Opcode::Negate, 1);
//! chunk.write_opcode(Opcode::Return, 1);
//!
//! assert_eq!(chunk.code(), &[0, 0, 2, 7]);
//!
//! let (instruction, next) = Instruction::decode(chunk.code(), 0).unwrap();
//! assert_eq!(instruction, Instruction::Constant(0));
//! assert_eq!(next, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod constants;
pub mod disasm;
pub mod instruction;
pub mod memory;
pub mod opcode;

// Re-export main types at crate root
pub use chunk::{Chunk, ConstantPoolFull};
pub use constants::ConstantPool;
pub use instruction::{decode_long_index, encode_long_index, DecodeError, Instruction};
pub use opcode::{Opcode, UnknownOpcode, MAX_CONSTANTS, MAX_SHORT_CONSTANTS};
