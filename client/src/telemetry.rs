//! Tracing setup for the client

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an env-filter default. Safe to call more than
/// once; only the first call installs the subscriber.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_console_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
