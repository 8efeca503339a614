//! Cypsa CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `cypsa` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod repl;
pub mod runtime;

pub use cli::{Cli, Mode};
pub use error::{CliError, CliResult};
pub use runtime::Runtime;
