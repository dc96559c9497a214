//! Log subscriber setup for the binary.
//!
//! Logs go to stderr so they never interleave with the tables printed on
//! stdout. `RUST_LOG` takes precedence over the level chosen on the command line.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, or `fallback` when it is unset or unparsable.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Build the fmt subscriber writing to `writer`.
pub fn subscriber<W>(fallback: &str, writer: W) -> impl Subscriber + Send + Sync + use<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(writer)
        .finish()
}

/// Install the global subscriber, logging to stderr.
pub fn init(fallback: &str) {
    if let Err(e) = tracing::subscriber::set_global_default(subscriber(fallback, std::io::stderr)) {
        eprintln!("Logging already initialised: {}", e);
    }
}
