//! Cypsa Parser Component
//!
//! Turns Cypsa source text into bytecode in a single pass.
//!
//! # Overview
//!
//! - [`Lexer`] - Tokenizes source code on demand
//! - [`Token`] - Token with its kind, borrowed lexeme and line
//! - [`Compiler`] - Precedence-climbing compiler writing straight into a [`Chunk`]
//! - [`compile`] - One-call entry point
//!
//! # Example
//!
//! ```
//! use bytecode_system::Chunk;
//!
//! let mut chunk = Chunk::new();
//! parser::compile(&mut chunk, "(1 + 2) * 3").unwrap();
//! assert_eq!(chunk.constants().len(), 3);
//!
//! let err = parser::compile(&mut Chunk::new(), "1 +").unwrap_err();
//! assert_eq!(err.to_string(), "[line 1] Error at end: Expected expression.");
//! ```
//!
//! [`Chunk`]: bytecode_system::Chunk

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compiler;
pub mod lexer;

pub use compiler::{compile, Compiler, Precedence, MAX_NESTING};
pub use lexer::{Keyword, Lexer, Punctuator, Token, TokenKind};
