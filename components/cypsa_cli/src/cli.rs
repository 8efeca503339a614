//! Command-line arguments

use clap::{ArgAction, Parser as ClapParser};

/// Cypsa expression interpreter
#[derive(Debug, Clone, Default, ClapParser)]
#[command(name = "cypsa", version, about = "Cypsa expression interpreter")]
pub struct Cli {
    /// Script to run
    #[arg(value_name = "FILE", conflicts_with_all = ["file", "eval"])]
    pub script: Option<String>,

    /// Script to run, as a flag
    #[arg(short, long, value_name = "FILE", conflicts_with = "eval")]
    pub file: Option<String>,

    /// Evaluate an inline expression
    #[arg(short, long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Start the interactive REPL
    #[arg(short, long, conflicts_with_all = ["script", "file", "eval"])]
    pub repl: bool,

    /// Print the disassembled chunk before running it
    #[arg(long)]
    pub print_bytecode: bool,

    /// Print the token stream instead of running
    #[arg(long)]
    pub tokens: bool,

    /// Log every executed instruction to stderr
    #[arg(long)]
    pub trace: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Run a script file
    File(String),
    /// Run an inline expression
    Eval(String),
    /// Interactive session
    Repl,
}

impl Cli {
    /// Arguments for running `path`
    pub fn with_file(path: impl Into<String>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    /// Arguments for evaluating `code`
    pub fn with_eval(code: impl Into<String>) -> Self {
        Self {
            eval: Some(code.into()),
            ..Self::default()
        }
    }

    /// Resolve the mode; no script and no expression means the REPL.
    pub fn mode(&self) -> Mode {
        if let Some(path) = self.file.as_ref().or(self.script.as_ref()) {
            Mode::File(path.clone())
        } else if let Some(code) = &self.eval {
            Mode::Eval(code.clone())
        } else {
            Mode::Repl
        }
    }
}
