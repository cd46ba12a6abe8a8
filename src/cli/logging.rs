//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with the merge summary on stdout.
//! `RUST_LOG` takes precedence; otherwise `--verbose` enables debug events.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("i18n_merge={}", default_level)));

    // A subscriber may already be installed when embedded; keep it.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
