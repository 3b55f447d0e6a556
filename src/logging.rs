use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "warn,formation_spawner=info";

/// Install the global tracing subscriber.
///
/// Logs go to stderr so the preview output on stdout stays clean. The
/// `ErrorLayer` lets `color_eyre` reports capture the active span trace.
pub fn init(verbose: bool) -> color_eyre::Result<()> {
    let filter = if verbose {
        EnvFilter::new("warn,formation_spawner=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
