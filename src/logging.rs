use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the diagnostic subscriber.
///
/// Events go to stderr so the report on stdout is never interleaved with them.
/// The filter comes from `RUST_LOG` and falls back to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
