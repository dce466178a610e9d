//! Tracing subscriber bootstrap.
//!
//! Installs the global subscriber once and a panic hook that reports
//! unexpected faults through `tracing` before the default hook runs.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "pinnote=info,pinnote_lib=info";

static INIT: Once = Once::new();

/// Initializes logging. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
            eprintln!("pinnote: warning: failed to install log subscriber: {err}");
        }

        install_panic_hook();
    });
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info.location().map(ToString::to_string).unwrap_or_default();
        tracing::error!(%location, panic = %panic_message(info), "unhandled panic");
        default_hook(info);
    }));
}

fn panic_message(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
