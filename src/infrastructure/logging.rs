use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber filtered by `directives`, falling back to
/// `warn` when they do not parse. Safe to call more than once.
pub fn init(directives: Option<&str>) {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
