//! Logging setup

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set. Otherwise each `-v` raises the level above the
/// configured default filter.
pub fn init_tracing(default_filter: &str, verbosity: u8) {
    let fallback = match verbosity {
        0 => default_filter,
        1 => "info",
        _ => "debug",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
