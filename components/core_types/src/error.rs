//! Cypsa error types.
//!
//! Compile-time problems are collected as [`Diagnostic`]s and returned
//! together in a [`CompileError`]. Problems the virtual machine detects while
//! executing a chunk are reported as a [`RuntimeError`].

use std::fmt;

use thiserror::Error;

/// The kind of compile-time error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lexer could not form a token (unterminated string, stray character)
    LexicalError,
    /// The token stream does not match the grammar
    SyntaxError,
}

/// Where in the token stream a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// At a specific lexeme
    Lexeme(String),
    /// At the end of the input
    End,
    /// No useful lexeme (lexer errors carry their own message instead)
    Unspecified,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::Lexeme(lexeme) => write!(f, " at '{}'", lexeme),
            ErrorLocation::End => f.write_str(" at end"),
            ErrorLocation::Unspecified => Ok(()),
        }
    }
}

/// A single compile-time error report.
///
/// # Examples
///
/// ```
/// use core_types::{Diagnostic, ErrorKind, ErrorLocation};
///
/// let diagnostic = Diagnostic {
///     kind: ErrorKind::SyntaxError,
///     line: 1,
///     location: ErrorLocation::End,
///     message: "Expected expression.".to_string(),
/// };
///
/// assert_eq!(diagnostic.to_string(), "[line 1] Error at end: Expected expression.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct Diagnostic {
    /// The type of error
    pub kind: ErrorKind,
    /// Source line of the offending token
    pub line: usize,
    /// The offending lexeme, if any
    pub location: ErrorLocation,
    /// Human-readable error message
    pub message: String,
}

/// A failed compile.
///
/// Holds every diagnostic recorded during the pass. Panic-mode recovery keeps
/// this to one report per error burst.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct CompileError {
    /// Diagnostics in the order they were reported
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileError {
    /// Line of the first reported diagnostic.
    pub fn first_line(&self) -> Option<usize> {
        self.diagnostics.first().map(|d| d.line)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

/// A failure detected while executing a chunk.
///
/// `offset` is the byte offset of the instruction being executed and `line`
/// the source line recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The opcode byte does not name any instruction
    #[error("[line {line}] Runtime error: unknown opcode {opcode} at offset {offset:04}")]
    UnknownOpcode {
        /// The unrecognised byte
        opcode: u8,
        /// Byte offset of the instruction
        offset: usize,
        /// Source line of the instruction
        line: usize,
    },
    /// An instruction needed more operands than the stack held
    #[error("[line {line}] Runtime error: stack underflow at offset {offset:04}")]
    StackUnderflow {
        /// Byte offset of the instruction
        offset: usize,
        /// Source line of the instruction
        line: usize,
    },
    /// The operand bytes of an instruction run past the end of the code
    #[error("[line {line}] Runtime error: truncated instruction at offset {offset:04}")]
    TruncatedInstruction {
        /// Byte offset of the instruction
        offset: usize,
        /// Source line of the instruction
        line: usize,
    },
    /// A constant-load refers past the end of the constant pool
    #[error("[line {line}] Runtime error: constant index {index} out of range at offset {offset:04}")]
    ConstantOutOfRange {
        /// The requested pool index
        index: usize,
        /// Byte offset of the instruction
        offset: usize,
        /// Source line of the instruction
        line: usize,
    },
    /// Execution reached the end of the code without a return
    #[error("Runtime error: reached end of code at offset {offset:04} without a return")]
    MissingReturn {
        /// Length of the code that was executed
        offset: usize,
    },
}

/// Outcome of compiling and then running a source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The source did not compile; nothing was executed
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// The chunk compiled but failed while running
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
