use tracing_subscriber::EnvFilter;

/// Human-readable logs on a terminal, JSON lines otherwise. The filter comes
/// from `RUST_LOG` and falls back to `info`.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .init();
    }

    tracing::info!(
        "userdir log output ready (RUST_LOG={})",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    );
}
