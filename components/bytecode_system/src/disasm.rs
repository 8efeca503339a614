//! Human-readable listing of a chunk's bytecode.
//!
//! Each line shows the byte offset, the source line (`|` when it repeats the
//! previous instruction's line), the mnemonic and, for constant loads, the
//! pool index and value:
//!
//! ```text
//! == expr ==
//! 0000    1 CONSTANT         [   0]  1
//! 0002    | NEGATE
//! 0003    | RETURN
//! ```

use crate::chunk::Chunk;
use crate::instruction::{DecodeError, Instruction};

/// Render the whole chunk under a `== name ==` header.
pub fn disassemble_chunk(chunk: &Chunk, name: &str) -> String {
    let mut out = format!("== {} ==\n", name);

    let mut offset = 0;
    while offset < chunk.len() {
        let (line, next) = disassemble_instruction(chunk, offset);
        out.push_str(&line);
        out.push('\n');
        offset = next;
    }
    out
}

/// Describe the instruction at `offset` on one line, without a trailing
/// newline, and return it with the offset of the next instruction.
///
/// Unknown opcodes print a notice and advance by a single byte. Truncated
/// operands consume the rest of the code.
pub fn disassemble_instruction(chunk: &Chunk, offset: usize) -> (String, usize) {
    let line = chunk.line_at(offset).unwrap_or_default();
    let repeats = offset > 0 && chunk.line_at(offset - 1) == Some(line);
    let source_line = if repeats {
        "   |".to_string()
    } else {
        format!("{:4}", line)
    };

    let (body, next) = match Instruction::decode(chunk.code(), offset) {
        Ok((instruction, next)) => {
            let name = instruction.opcode().name();
            let body = match instruction.constant_index() {
                Some(index) => match chunk.constants().get(index) {
                    Some(value) => format!("{:<16} [{:4}]  {}", name, index, value),
                    None => format!("{:<16} [{:4}]  <missing>", name, index),
                },
                None => name.to_string(),
            };
            (body, next)
        }
        Err(DecodeError::UnknownOpcode { opcode, .. }) => {
            (format!("Unknown opcode {}", opcode), offset + 1)
        }
        Err(DecodeError::Truncated { opcode, .. }) => {
            (format!("{:<16} <truncated>", opcode.name()), chunk.len())
        }
        Err(DecodeError::OutOfBounds { .. }) => {
            ("<end of code>".to_string(), chunk.len().max(offset + 1))
        }
    };

    (format!("{:04} {} {}", offset, source_line, body), next)
}
