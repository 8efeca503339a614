//! Logging setup for the binary

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for a given `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,parser=debug,interpreter=debug,cypsa_cli=debug",
        _ => "warn,parser=trace,interpreter=trace,cypsa_cli=trace",
    }
}

/// Verbosity actually used; execution tracing is only visible at trace level.
pub fn effective_verbosity(verbosity: u8, trace: bool) -> u8 {
    if trace {
        verbosity.max(2)
    } else {
        verbosity
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// verbosity flag. Output goes to stderr.
pub fn init_logging(verbosity: u8, trace: bool) {
    let level = effective_verbosity(verbosity, trace);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
