// Logging setup

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` when
/// `verbose` is requested. Output goes to stderr so stdout stays usable for
/// `--dry-run` summaries.
pub fn init_logging(verbose: bool) -> Result<(), String> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| {
            let error_msg = format!("failed to initialise logging: {}", e);
            eprintln!("{}", error_msg);
            error_msg
        })?;

    debug!("logging initialised at default level {}", default_level);
    Ok(())
}
