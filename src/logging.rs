use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or progress
/// information as well when `verbose` is set.
pub fn init_logging(verbose: bool) -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::IoError(format!("Failed to initialize logging: {e}")))
}
