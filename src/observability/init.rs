//! Tracing initialization and subscriber setup.
//!
//! Configures a `tracing-subscriber` pipeline with an environment-style
//! filter so hosts (and bug reports) can dial span verbosity per module
//! without recompiling.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// The filter string uses `EnvFilter` syntax
/// (e.g. `"info"`, `"stackit_board=debug"`); `None` defaults to `"info"`.
///
/// # Initialization Behavior
///
/// Idempotent: only the first successful call installs a subscriber; later
/// calls (including from tests running in one process) are silently
/// ignored. Observability is optional, so installation failure is never an
/// error.
///
/// # Example
///
/// ```
/// use stackit_board::observability::init_tracing;
///
/// init_tracing(Some("stackit_board=debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(filter: Option<&str>) {
    let filter = EnvFilter::new(filter.unwrap_or("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
