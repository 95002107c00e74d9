//! Tracer provider backed by a local trace file.

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpJson;
use futures_util::future::{self, BoxFuture};
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;

/// Span exporter appending one OTLP JSON line per batch.
#[derive(Debug)]
struct FileExporter {
    file: RotatingFile,
    encoder: OtlpJson,
    stopped: bool,
}

impl SpanExporter for FileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.stopped {
            return Box::pin(future::ready(Err(TraceError::from("trace exporter stopped"))));
        }

        let line = self.encoder.encode(&batch).to_string();
        let result = self
            .file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }
}

/// Builds a provider exporting every finished span to `path` synchronously.
pub fn file_tracer_provider(path: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = FileExporter {
        file: RotatingFile::new(path),
        encoder: OtlpJson::new(resource.clone(), scope),
        stopped: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
