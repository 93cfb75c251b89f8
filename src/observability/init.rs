//! Subscriber setup.

use super::tracer;
use crate::domain::error::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::{Path, PathBuf};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "hub-otlp.json";

const SERVICE_NAME: &str = "lekutao-hub";

const DEFAULT_LEVEL: &str = "info";

/// Picks the filter directive: `RUST_LOG` first, then the configured level.
///
/// ```rust
/// use lekutao_hub::observability::effective_level;
///
/// assert_eq!(effective_level(None, None), "info");
/// assert_eq!(effective_level(None, Some("debug")), "debug");
/// assert_eq!(effective_level(Some("warn"), Some("debug")), "warn");
/// assert_eq!(effective_level(Some("  "), Some("debug")), "debug");
/// ```
#[must_use]
pub fn effective_level(rust_log: Option<&str>, configured: Option<&str>) -> String {
    rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| configured.map(str::trim).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_LEVEL)
        .to_string()
}

/// Installs the global subscriber exporting spans to `data_dir`.
///
/// Returns the path of the trace file. Calling it again after a subscriber
/// has been installed is harmless; the first one stays.
///
/// # Errors
///
/// Returns [`HubError::Io`](crate::HubError::Io) if the data directory cannot
/// be created.
pub fn init_tracing(config: &Config, data_dir: &Path) -> Result<PathBuf> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = effective_level(rust_log.as_deref(), config.trace_level.as_deref());

    std::fs::create_dir_all(data_dir)?;

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    if tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already installed");
    }

    tracing::info!(level = %level, trace_file = %trace_file.display(), "tracing initialized");
    Ok(trace_file)
}
