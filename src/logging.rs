use std::sync::Once;

use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT_LOG: Once = Once::new();

/// Installs the global tracing subscriber writing to stdout.
///
/// `RUST_LOG` takes precedence over `filter` when it is set. Calling this more than
/// once has no effect.
///
/// ```bash
/// export RUST_LOG="obsr=debug"
/// ```
pub fn log_init(filter: impl Into<String>) {
    let filter = filter.into();

    INIT_LOG.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

        let terminal_layer = Layer::new()
            .with_writer(std::io::stdout)
            .with_target(false);

        // Another subscriber may already be installed, e.g. by a test harness.
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(terminal_layer)
            .try_init();
    });
}
