//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the basket tracing/logging system.
///
/// Reads the `BASKET_LOG` environment variable for per-subsystem log levels.
/// Format: `BASKET_LOG=basket_mining=debug,basket_core=info`
///
/// Falls back to `basket_core=info,basket_mining=info` if `BASKET_LOG`
/// is not set or is invalid.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("BASKET_LOG")
            .unwrap_or_else(|_| EnvFilter::new("basket_core=info,basket_mining=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
