//! Bytecode interpreter for the Cypsa language
//!
//! This crate provides the stack-based virtual machine that executes chunks
//! produced by the [`parser`] crate:
//! - Index-based value stack that grows on demand and is reused across runs
//! - Compact and wide constant loads
//! - Runtime checks that turn malformed bytecode into [`RuntimeError`]s
//! - Optional per-instruction tracing through `tracing`
//!
//! # Example
//!
//! ```
//! use interpreter::VM;
//! use core_types::Value;
//!
//! let mut vm = VM::new();
//! assert_eq!(vm.interpret("1 + 2 * 3").unwrap(), Value::new(7.0));
//! assert_eq!(vm.interpret("-(2 + 3)").unwrap().to_string(), "-5");
//! ```
//!
//! [`RuntimeError`]: core_types::RuntimeError

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod stack;
pub mod vm;

// Re-export main types at crate root
pub use stack::ValueStack;
pub use vm::{interpret, VM};
