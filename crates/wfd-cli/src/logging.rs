use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Without a log file, events go to stderr at WARN (DEBUG with `verbose`),
/// overridable through `RUST_LOG`. With a log file, every event is written
/// to it and stderr stays quiet.
pub fn init(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let installed = match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("trace"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => {
            let default = if verbose { "debug" } else { "warn" };
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
        }
    };
    installed.map_err(|e| anyhow::anyhow!("cannot install logger: {e}"))
}
