//! Logging and tracing infrastructure for forest-entropy.
//!
//! The library only emits `tracing` events. Binaries, benches and tests
//! install a subscriber through the helpers below.

use std::sync::Once;
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber.
///
/// This should be called once at program startup.
/// Subsequent calls are ignored, as is a subscriber installed elsewhere.
pub fn init_tracing() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        let installed = tracing_subscriber::registry()
            .with(default_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok();

        if installed {
            info!("forest-entropy tracing initialized");
        }
    });
}

/// Initialize tracing with JSON output for structured logging.
pub fn init_tracing_json() {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);

        let installed = tracing_subscriber::registry()
            .with(default_filter())
            .with(fmt_layer)
            .try_init()
            .is_ok();

        if installed {
            info!("forest-entropy tracing initialized (JSON mode)");
        }
    });
}

/// Macro for creating spans around a unit of work
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::debug_span!($name, $($field)*)
    };
}

/// Macro for logging an error and handing it back, for use with `Err(..)?`
#[macro_export]
macro_rules! log_error {
    ($err:expr) => {{
        let e = $err;
        tracing::debug!(error = %e, "Operation failed");
        e
    }};
    ($err:expr, $msg:expr) => {{
        let e = $err;
        tracing::debug!(error = %e, message = $msg, "Operation failed");
        e
    }};
}
