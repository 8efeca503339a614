//! Core Cypsa value types and error handling.
//!
//! This crate provides the foundational types shared by the compiler and the
//! virtual machine: the runtime value representation and the error types
//! produced while compiling or executing a program.
//!
//! # Overview
//!
//! - [`Value`] - The numeric runtime value
//! - [`Diagnostic`] - A single compile-time error report
//! - [`CompileError`] - All diagnostics recorded during a failed compile
//! - [`RuntimeError`] - Failures detected by the virtual machine
//! - [`InterpretError`] - Either of the above, for compile-and-run callers
//!
//! # Examples
//!
//! ```
//! use core_types::{Diagnostic, ErrorKind, ErrorLocation, Value};
//!
//! let value = Value::new(7.0);
//! assert_eq!(value.to_string(), "7");
//!
//! let diagnostic = Diagnostic {
//!     kind: ErrorKind::SyntaxError,
//!     line: 3,
//!     location: ErrorLocation::Lexeme(")".to_string()),
//!     message: "Expected expression.".to_string(),
//! };
//! assert_eq!(diagnostic.to_string(), "[line 3] Error at ')': Expected expression.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod value;

pub use error::{CompileError, Diagnostic, ErrorKind, ErrorLocation, InterpretError, RuntimeError};
pub use value::Value;
