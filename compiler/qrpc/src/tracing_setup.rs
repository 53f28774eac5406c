use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter variable read first; `RUST_LOG` is the fallback.
pub const LOG_VAR: &str = "QRP_LOG";

/// Install the global subscriber once. Output goes to stderr, filtered by
/// `QRP_LOG` (or `RUST_LOG`). Nothing is installed when neither is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_VAR).or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
