use tracing_subscriber::EnvFilter;

/// Initialise logging at `info`, or `debug` when the settings file asks for
/// it. `RUST_LOG` may override the level only in debug mode so a stray
/// environment variable cannot make a normal session verbose.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
