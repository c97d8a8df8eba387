use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout stays reserved for command output.
///
/// An unparsable filter falls back to the default; calling this twice is
/// harmless.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
