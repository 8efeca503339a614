//! Cypsa CLI
//!
//! Entry point for the interpreter. Parses CLI arguments and delegates to
//! the Runtime for execution.

use std::process::ExitCode;

use clap::Parser as ClapParser;
use cypsa_cli::error::{EXIT_OK, EXIT_USAGE};
use cypsa_cli::logging::init_logging;
use cypsa_cli::{Cli, CliResult, Mode, Runtime};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { EXIT_OK };
            let _ = err.print();
            return exit_code(code);
        }
    };

    init_logging(cli.verbose, cli.trace);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            exit_code(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let mode = cli.mode();

    if cli.tokens {
        print!("{}", Runtime::tokens_for(&mode)?);
        return Ok(());
    }

    let mut runtime = Runtime::new()
        .with_print_bytecode(cli.print_bytecode)
        .with_trace(cli.trace);

    match mode {
        Mode::File(path) => println!("{}", runtime.execute_file(&path)?),
        Mode::Eval(code) => println!("{}", runtime.execute_string(&code)?),
        Mode::Repl => runtime.repl()?,
    }
    Ok(())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
