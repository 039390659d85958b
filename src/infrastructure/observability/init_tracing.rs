use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured directives. Fails if a subscriber is already set.
pub fn init_tracing(config: &TracingConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directives));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json_format {
        registry
            .with(fmt_layer.json().flatten_event(true).with_current_span(true))
            .try_init()?;
    } else {
        registry.with(fmt_layer.compact()).try_init()?;
    }

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        directives = %config.default_directives,
        "Tracing initialized"
    );
    Ok(())
}
