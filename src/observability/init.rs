//! Subscriber setup.

use super::tracer::file_tracer_provider;
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "vagas";
const TRACE_FILE: &str = "vagas-otlp.json";
const DEFAULT_LEVEL: &str = "info";

/// Location of the trace file inside the data directory.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE)
}

/// Installs the global subscriber exporting spans to [`trace_file_path`].
///
/// The filter comes from `config.trace_level`, defaulting to `info`. When the
/// data directory cannot be created tracing stays off. Only the first call in
/// a process takes effect.
///
/// ```no_run
/// use vagas::observability::init_tracing;
/// use vagas::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let path = trace_file_path();
    if let Some(dir) = path.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = file_tracer_provider(path, resource, SERVICE_NAME);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(layer)
        .try_init();
}
