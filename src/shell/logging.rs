use tracing_subscriber::{EnvFilter, fmt};

/// Respects `RUST_LOG`, falling back to `info,tower_http=info`.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}
