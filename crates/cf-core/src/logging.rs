//! Structured logging for the coinflip CLI.
//!
//! Human-readable `tracing` output on stderr; stdout is reserved for the
//! report payload. The default level is info, raised by `-v`/`-vv` and
//! lowered by `-q`, with `RUST_LOG` taking precedence when set.

use tracing_subscriber::EnvFilter;

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs.
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cf_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
