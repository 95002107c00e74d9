//! Tracing export to a local OTLP JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → TracerProvider → FileExporter → vagas-otlp.json
//! ```
//!
//! Spans land in `vagas-otlp.json` under the data directory
//! (`$XDG_DATA_HOME/vagas` or `~/.local/share/vagas`), one OTLP document per
//! line. The file rotates at 5 MiB into `.1` and `.2` backups.
//!
//! The filter level is the configured `trace_level`, or `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: File-backed span exporter and provider
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, trace_file_path};
