//! Log setup for the binary.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `MT_LOG` wins over `RUST_LOG`; without either the level follows the
/// `-v` count (warn, info, debug).
pub fn init(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("MT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
