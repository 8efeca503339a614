//! Error types for the CLI

use core_types::{CompileError, InterpretError, RuntimeError};
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Exit status for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit status for bad command-line usage
pub const EXIT_USAGE: i32 = 64;
/// Exit status for a source that failed to compile
pub const EXIT_COMPILE: i32 = 65;
/// Exit status for a runtime error
pub const EXIT_RUNTIME: i32 = 70;
/// Exit status for an I/O failure
pub const EXIT_IO: i32 = 74;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The script could not be read
    #[error("Could not read file '{path}': {source}")]
    Io {
        /// Path as given on the command line
        path: String,
        /// Underlying failure
        source: std::io::Error,
    },

    /// The source did not compile
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The chunk failed while running
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// Line editor failure
    #[error("REPL error: {0}")]
    Repl(#[from] ReadlineError),

    /// Flags that cannot be used together
    #[error("Usage: {0}")]
    Usage(String),
}

impl From<InterpretError> for CliError {
    fn from(err: InterpretError) -> Self {
        match err {
            InterpretError::Compile(e) => CliError::Compile(e),
            InterpretError::Runtime(e) => CliError::Runtime(e),
        }
    }
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Compile(_) => EXIT_COMPILE,
            CliError::Runtime(_) => EXIT_RUNTIME,
            CliError::Io { .. } | CliError::Repl(_) => EXIT_IO,
            CliError::Usage(_) => EXIT_USAGE,
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
