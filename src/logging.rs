use tracing_subscriber::EnvFilter;

/// tracing初期化。RUST_LOGがあればそちらを優先
pub fn init(verbose: bool) {
    let default = if verbose { "warn,nota_fiscal_rust=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}
