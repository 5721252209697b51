use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the stderr subscriber. `RUST_LOG` overrides the default filter;
/// `verbose` raises the crate to `debug`. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(format!("{DEFAULT_FILTER},menu_tool=debug"))
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
