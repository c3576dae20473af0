//! Tracing setup
//!
//! Diagnostics go to stderr so they never mix with command output or CSV
//! written to stdout. `RUST_LOG` overrides the default level.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "easybudget=warn";

/// Install the global tracing subscriber (only the first call has an effect)
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
