//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Global;

/// Default filter when `RUST_LOG` is unset, based on `--verbose`/`--silent`.
pub fn default_filter(global: &Global) -> &'static str {
    if global.is_verbose() {
        "question_loader=debug,interview_core=debug"
    } else if global.is_silent() {
        "question_loader=error,interview_core=error"
    } else {
        "question_loader=info,interview_core=info"
    }
}

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence.
pub fn init_tracing(global: &Global) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(global).into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
