use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CATVIEW_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "catview=warn",
        1 => "catview=info",
        _ => "catview=debug",
    }
}

/// Installs the stderr subscriber. `CATVIEW_LOG` overrides the `-v` level.
pub(super) fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Fails only if a subscriber is already set, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
