//! Logging bootstrap

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with a custom level.
///
/// `RUST_LOG` takes precedence over `level` when it is set. Output goes to
/// stderr so it does not interleave with prompts rendered on stdout.
pub fn init_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
