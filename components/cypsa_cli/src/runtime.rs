//! Runtime orchestration for Cypsa execution
//!
//! The Runtime struct coordinates all components:
//! - Lexer for token dumps
//! - Compiler for filling a chunk
//! - Disassembler for bytecode listings
//! - VM for execution

use bytecode_system::disasm::disassemble_chunk;
use bytecode_system::Chunk;
use core_types::Value;
use interpreter::VM;
use parser::Lexer;
use tracing::debug;

use crate::cli::Mode;
use crate::error::{CliError, CliResult};

/// Main runtime that orchestrates all Cypsa execution components
#[derive(Debug, Default)]
pub struct Runtime {
    /// Whether to print bytecode before execution
    print_bytecode: bool,
    /// Persistent VM instance, reused for every execution
    vm: VM,
}

impl Runtime {
    /// Create a new runtime instance
    ///
    /// # Example
    /// ```
    /// use cypsa_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new();
    /// assert_eq!(runtime.execute_string("1 + 2").unwrap().to_string(), "3");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable bytecode printing
    pub fn with_print_bytecode(mut self, enabled: bool) -> Self {
        self.print_bytecode = enabled;
        self
    }

    /// Enable per-instruction execution tracing
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.vm.set_trace(enabled);
        self
    }

    /// Toggle bytecode printing on a live runtime
    pub fn set_print_bytecode(&mut self, enabled: bool) {
        self.print_bytecode = enabled;
    }

    /// Check whether bytecode printing is enabled
    pub fn is_print_bytecode_enabled(&self) -> bool {
        self.print_bytecode
    }

    /// Read a script from disk
    ///
    /// # Errors
    /// Returns `CliError::Io` carrying the path if the file cannot be read
    pub fn read_source(path: &str) -> CliResult<String> {
        std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })
    }

    /// Execute a Cypsa file
    ///
    /// # Arguments
    /// * `path` - Path to the script
    ///
    /// # Returns
    /// The result value from executing the file
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or execution fails
    pub fn execute_file(&mut self, path: &str) -> CliResult<Value> {
        let source = Self::read_source(path)?;
        debug!(path, bytes = source.len(), "loaded script");
        self.execute_string(&source)
    }

    /// Execute a Cypsa source string
    ///
    /// # Arguments
    /// * `source` - Cypsa source code
    ///
    /// # Returns
    /// The result value from executing the code
    ///
    /// # Errors
    /// Returns `CliError::Compile` if the source does not compile (nothing is
    /// run) or `CliError::Runtime` if execution fails
    pub fn execute_string(&mut self, source: &str) -> CliResult<Value> {
        let chunk = Self::compile(source)?;

        if self.print_bytecode {
            print!("{}", disassemble_chunk(&chunk, "code"));
        }

        Ok(self.vm.run(&chunk)?)
    }

    /// Compile `source` into a fresh chunk
    pub fn compile(source: &str) -> CliResult<Chunk> {
        let mut chunk = Chunk::new();
        parser::compile(&mut chunk, source)?;
        Ok(chunk)
    }

    /// Render the token stream of `source`, one token per line.
    ///
    /// Tokens on the same line as the previous one show `|` instead of the
    /// line number.
    pub fn token_listing(source: &str) -> String {
        let mut out = String::new();
        let mut last_line = None;

        for token in Lexer::new(source) {
            let line = if last_line == Some(token.line) {
                "   |".to_string()
            } else {
                last_line = Some(token.line);
                format!("{:4}", token.line)
            };
            out.push_str(&format!(
                "{} {:<24} '{}'\n",
                line,
                token.kind.to_string(),
                token.lexeme
            ));
        }
        out
    }

    /// Token listing for the script or expression selected by `mode`
    ///
    /// # Errors
    /// Returns `CliError::Usage` when no source was given, and `CliError::Io`
    /// if the script cannot be read
    pub fn tokens_for(mode: &Mode) -> CliResult<String> {
        let source = match mode {
            Mode::File(path) => Self::read_source(path)?,
            Mode::Eval(code) => code.clone(),
            Mode::Repl => {
                return Err(CliError::Usage(
                    "--tokens needs a FILE or --eval".to_string(),
                ))
            }
        };
        Ok(Self::token_listing(&source))
    }

    /// Start an interactive REPL session
    ///
    /// # Errors
    /// Returns `CliError::Repl` if the line editor fails
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }
}
