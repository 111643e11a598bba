use crate::Environment;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre hooks for readable error reports.
///
/// Call early in `main()`, before any fallible operation. Safe to call more
/// than once.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Development gets
/// human-oriented output with targets; production drops ANSI colors. An
/// [`tracing_error::ErrorLayer`] is always installed so spans are captured
/// in error reports.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(environment.is_development())
        .with_ansi(environment.is_development());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::debug!(?environment, "tracing initialized");
}
