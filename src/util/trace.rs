//! Installs a `tracing_subscriber` formatter so the spans emitted
//! around lane walks and network sampling become visible.
//!
//! Output is filtered through the environment, for example:
//! ```bash
//! RUST_LOG=lanegraph=trace
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces. Records emitted through `log` are forwarded
/// to the same subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn initialize_tracer() -> bool {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
