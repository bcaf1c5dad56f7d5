use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,waypoint_core=debug";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize a simple stdout tracing subscriber for development
pub fn init_stdout_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .init();
}

/// Initialize stdout tracing, reporting instead of panicking when a global
/// subscriber is already installed.
///
/// # Arguments
/// * `fallback` - Filter directives used when `RUST_LOG` is unset
/// * `json` - Emit one JSON object per line instead of human-readable text
pub fn try_init_tracing(fallback: &str, json: bool) -> Result<(), anyhow::Error> {
    let filter = env_filter(fallback);
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    tracing::debug!(filter = fallback, json, "tracing initialized");
    Ok(())
}
