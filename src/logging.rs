//! Tracing subscriber setup.
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global subscriber (one-time). Subsequent calls are ignored.
/// `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        if let Err(err) = tracing_subscriber::registry().with(filter).with(fmt::layer()).try_init() {
            // someone else owns the global dispatcher; events still reach it
            tracing::debug!(%err, "global subscriber already installed, keeping it");
        }
    });
}
