//! Log output setup.
//!
//! Development gets pretty, colored output with source locations. Production
//! gets flattened JSON lines carrying the current request span (and with it the
//! request id). `RUST_LOG` overrides the default directives in both modes.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Environment;

const DEVELOPMENT_DIRECTIVES: &str = "debug,tower_http=debug,sqlx=warn";
const PRODUCTION_DIRECTIVES: &str = "info,tower_http=info,sqlx=warn";

/// Install the global subscriber for `env`. Call once, before serving.
pub fn init_tracing(env: &Environment) {
    let directives = if env.is_production() {
        PRODUCTION_DIRECTIVES
    } else {
        DEVELOPMENT_DIRECTIVES
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    if env.is_production() {
        tracing_subscriber::registry()
            .with(
                fmt_layer
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .with_filter(env_filter),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt_layer
                    .with_line_number(true)
                    .with_file(true)
                    .pretty()
                    .with_filter(env_filter),
            )
            .init();
    }

    tracing::info!(environment = ?env, "Tracing initialized");
}
