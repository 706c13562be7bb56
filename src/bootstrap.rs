//! Bootstrap helpers for embedding hosts.
//!
//! Hosts call [`load_env`] then [`init_tracing`] once at startup, before
//! building a [`crate::Config`]. Both are optional: a host that manages
//! its own env and subscriber can skip them.

use tracing_subscriber::EnvFilter;

/// Load env vars from a `.env` file in the working directory, if present.
///
/// dotenvy never overwrites existing env vars, so explicit env vars take
/// priority over `.env` contents.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}

/// Install a global `tracing` subscriber honoring `RUST_LOG`.
///
/// Defaults to `info` when `RUST_LOG` is unset. A subscriber already
/// installed by the host wins; the second install attempt is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
