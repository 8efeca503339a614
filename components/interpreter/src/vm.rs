//! Virtual Machine for bytecode execution
//!
//! Main entry point for executing Cypsa bytecode.

use bytecode_system::disasm::disassemble_instruction;
use bytecode_system::{Chunk, DecodeError, Instruction};
use core_types::{InterpretError, RuntimeError, Value};
use tracing::{debug, trace};

use crate::stack::ValueStack;

/// Virtual Machine for executing Cypsa bytecode
///
/// One VM can run any number of chunks in turn. The value stack is reset at
/// the start of every run but keeps its storage.
#[derive(Debug, Default)]
pub struct VM {
    /// Operand stack
    stack: ValueStack,
    /// Byte offset of the next instruction
    ip: usize,
    /// Log every instruction at trace level
    trace_execution: bool,
}

impl VM {
    /// Create a new VM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`VM::set_trace`]
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace_execution = enabled;
        self
    }

    /// Enable or disable per-instruction tracing
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace_execution = enabled;
    }

    /// Number of stack slots currently allocated
    pub fn stack_capacity(&self) -> usize {
        self.stack.capacity()
    }

    /// Compile `source` and run the result
    ///
    /// A source that fails to compile is never executed.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The value of the expression
    /// * `Err(InterpretError::Compile)` - The diagnostics of a failed compile
    /// * `Err(InterpretError::Runtime)` - The error that halted execution
    pub fn interpret(&mut self, source: &str) -> Result<Value, InterpretError> {
        let mut chunk = Chunk::new();
        parser::compile(&mut chunk, source)?;
        Ok(self.run(&chunk)?)
    }

    /// Execute a bytecode chunk and return the result
    ///
    /// # Arguments
    ///
    /// * `chunk` - The bytecode chunk to execute
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The value popped by the first `Return`
    /// * `Err(RuntimeError)` - If the chunk is malformed
    ///
    /// # Example
    ///
    /// ```
    /// use bytecode_system::{Chunk, Opcode};
    /// use core_types::Value;
    /// use interpreter::VM;
    ///
    /// let mut vm = VM::new();
    /// let mut chunk = Chunk::new();
    ///
    /// chunk.write_constant(Value::new(42.0), 1).unwrap();
    /// chunk.write_opcode(Opcode::Negate, 1);
    /// chunk.write_opcode(Opcode::Return, 1);
    ///
    /// let result = vm.run(&chunk).unwrap();
    /// assert_eq!(result, Value::new(-42.0));
    /// ```
    pub fn run(&mut self, chunk: &Chunk) -> Result<Value, RuntimeError> {
        self.stack.reset();
        self.ip = 0;
        debug!(bytes = chunk.len(), "run start");

        loop {
            let offset = self.ip;
            if offset >= chunk.len() {
                return Err(RuntimeError::MissingReturn {
                    offset: chunk.len(),
                });
            }
            if self.trace_execution {
                self.trace_instruction(chunk, offset);
            }

            let line = chunk.line_at(offset).unwrap_or_default();
            let (instruction, next) = Instruction::decode(chunk.code(), offset)
                .map_err(|err| decode_failure(err, offset, line))?;
            self.ip = next;

            match instruction {
                Instruction::Constant(index) => {
                    self.push_constant(chunk, index as usize, offset, line)?
                }
                Instruction::ConstantLong(index) => {
                    self.push_constant(chunk, index as usize, offset, line)?
                }
                Instruction::Negate => {
                    let top = self
                        .stack
                        .peek_mut()
                        .ok_or(RuntimeError::StackUnderflow { offset, line })?;
                    *top = -*top;
                }
                Instruction::Add => self.binary_op(offset, line, |a, b| a + b)?,
                Instruction::Subtract => self.binary_op(offset, line, |a, b| a - b)?,
                Instruction::Multiply => self.binary_op(offset, line, |a, b| a * b)?,
                Instruction::Divide => self.binary_op(offset, line, |a, b| a / b)?,
                Instruction::Return => {
                    let result = self
                        .stack
                        .pop()
                        .ok_or(RuntimeError::StackUnderflow { offset, line })?;
                    debug!(%result, "run finished");
                    return Ok(result);
                }
            }
        }
    }

    fn push_constant(
        &mut self,
        chunk: &Chunk,
        index: usize,
        offset: usize,
        line: usize,
    ) -> Result<(), RuntimeError> {
        let value = chunk
            .constants()
            .get(index)
            .ok_or(RuntimeError::ConstantOutOfRange {
                index,
                offset,
                line,
            })?;
        self.stack.push(value);
        Ok(())
    }

    /// Pop the right then the left operand and push `op(left, right)`.
    fn binary_op<F>(&mut self, offset: usize, line: usize, op: F) -> Result<(), RuntimeError>
    where
        F: FnOnce(Value, Value) -> Value,
    {
        let underflow = RuntimeError::StackUnderflow { offset, line };
        let right = self.stack.pop().ok_or_else(|| underflow.clone())?;
        let left = self.stack.pop().ok_or(underflow)?;
        self.stack.push(op(left, right));
        Ok(())
    }

    fn trace_instruction(&self, chunk: &Chunk, offset: usize) {
        let stack = self
            .stack
            .as_slice()
            .iter()
            .map(|value| format!("[ {} ]", value))
            .collect::<String>();
        let (listing, _) = disassemble_instruction(chunk, offset);
        trace!(stack = %stack, "{}", listing);
    }
}

fn decode_failure(err: DecodeError, offset: usize, line: usize) -> RuntimeError {
    match err {
        DecodeError::UnknownOpcode { opcode, .. } => RuntimeError::UnknownOpcode {
            opcode,
            offset,
            line,
        },
        DecodeError::Truncated { .. } => RuntimeError::TruncatedInstruction { offset, line },
        DecodeError::OutOfBounds { .. } => RuntimeError::MissingReturn { offset },
    }
}

/// Compile and run `source` on a fresh VM
pub fn interpret(source: &str) -> Result<Value, InterpretError> {
    VM::new().interpret(source)
}
