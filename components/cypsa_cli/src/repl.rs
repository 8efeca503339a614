//! REPL (Read-Eval-Print Loop) implementation

use crate::error::CliResult;
use crate::runtime::Runtime;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Prompt shown before every line
pub const PROMPT: &str = ">>> ";

/// What the loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the interactive REPL
///
/// Every line is compiled and run on its own. Errors are printed and the
/// loop carries on.
///
/// # Arguments
/// * `runtime` - The Runtime instance to use for execution
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()?;

    println!("Cypsa v{}", env!("CARGO_PKG_VERSION"));
    println!("Type an expression, '.help' for commands or 'exit' to quit.");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);

                if handle_line(trimmed, runtime) == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C drops the current line
                println!("^C");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!();
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    debug!("repl closed");
    Ok(())
}

fn handle_line(line: &str, runtime: &mut Runtime) -> Flow {
    if line == "exit" || line == "quit" {
        return Flow::Exit;
    }
    if line.starts_with('.') {
        return handle_repl_command(line, runtime);
    }

    match runtime.execute_string(line) {
        Ok(value) => println!("{}", value),
        Err(e) => eprintln!("{}", e),
    }
    Flow::Continue
}

/// Handle special REPL commands
fn handle_repl_command(command: &str, runtime: &mut Runtime) -> Flow {
    match command {
        ".help" => {
            println!("REPL Commands:");
            println!("  .help      - Show this help message");
            println!("  .bytecode  - Toggle bytecode listing before each run");
            println!("  .exit      - Exit the REPL");
            println!("  exit, quit - Exit the REPL");
        }
        ".bytecode" => {
            let enabled = !runtime.is_print_bytecode_enabled();
            runtime.set_print_bytecode(enabled);
            println!(
                "Bytecode listing: {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        ".exit" => return Flow::Exit,
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
    Flow::Continue
}
