use tracing::Subscriber;
use tracing_subscriber::{fmt, EnvFilter};

/// Build the stderr subscriber for the CLI.
///
/// `RUST_LOG` wins when it is set; otherwise the level follows the
/// command-line verbosity.
pub fn create_tracing_subscriber(verbosity: u8, quiet: bool) -> impl Subscriber {
    let level = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish()
}
