//! Log output for the CLI
//!
//! Logs go to stderr so `eval` output on stdout stays machine-readable.
//! The verbosity flags choose the default filter; `KEYPAD_CALC_LOG` takes
//! precedence when set:
//!
//! ```bash
//! KEYPAD_CALC_LOG=keypad_calc=trace keypad-calc eval 1 + 2 =
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "KEYPAD_CALC_LOG";

/// Builds the log filter for a configuration
pub fn build_filter(config: &CliConfig) -> CliResult<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| CliError::logging(format!("{LOG_ENV}={directives}: {e}"))),
        _ => EnvFilter::try_new(config.verbosity.log_directive())
            .map_err(|e| CliError::logging(e.to_string())),
    }
}

/// Installs the global subscriber.
///
/// Call once at startup; a second call reports an error instead of
/// replacing the first subscriber.
pub fn init(config: &CliConfig) -> CliResult<()> {
    let filter = build_filter(config)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(config.color.should_color())
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
