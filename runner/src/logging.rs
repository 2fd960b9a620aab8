use miette::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is unset or unreadable.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Diagnostics go to stderr so the answer
/// table on stdout stays clean.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "tracy")]
    let registry = {
        tracy_client::Client::start();
        registry.with(tracing_tracy::TracyLayer::default())
    };

    registry
        .try_init()
        .map_err(|e| miette!("failed to install tracing subscriber: {e}"))
}
