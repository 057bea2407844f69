// src/log.rs
//
// Tracing setup plus the short call-site macros used across the crate.
// Events go to `.store/debug.log`; the CLI also mirrors them to stderr.

use std::{path::Path, sync::OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILE};

pub use tracing;

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Safe to call more than once; only the
/// first call wins.
pub fn init(dir: &Path, console: bool) {
    if GUARD.get().is_some() {
        return;
    }
    let _ = std::fs::create_dir_all(dir);

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_timer(fmt::time::uptime())
        .with_writer(writer);

    let console_layer = console.then(|| fmt::layer().with_writer(std::io::stderr));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_ok();

    // Keep the guard alive for the whole process so the writer flushes on exit.
    if installed {
        let _ = GUARD.set(guard);
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
