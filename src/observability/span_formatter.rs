//! OTLP JSON encoding of exported spans.
//!
//! Each exported batch becomes one `resourceSpans` document, written as a
//! single line so the trace file can be read with any JSON-lines tool.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Encodes span batches for one service and instrumentation scope.
pub struct OtlpJson {
    resource: Resource,
    scope: &'static str,
}

impl OtlpJson {
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    /// Encodes `batch` as a complete OTLP document.
    pub fn encode(&self, batch: &[SpanData]) -> JsonValue {
        let resource: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": batch.iter().map(span).collect::<Vec<_>>(),
                }],
            }],
        })
    }
}

fn span(data: &SpanData) -> JsonValue {
    let parent = if data.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", data.parent_span_id)
    };
    let (code, message) = status(&data.status);

    json!({
        "traceId": format!("{:032x}", data.span_context.trace_id()),
        "spanId": format!("{:016x}", data.span_context.span_id()),
        "parentSpanId": parent,
        "name": data.name,
        "kind": kind(&data.span_kind),
        "startTimeUnixNano": unix_nanos(data.start_time),
        "endTimeUnixNano": unix_nanos(data.end_time),
        "attributes": attributes(&data.attributes),
        "events": data.events.iter().map(event).collect::<Vec<_>>(),
        "links": data.links.iter().map(link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(kvs: &[KeyValue]) -> Vec<JsonValue> {
    kvs.iter().map(|kv| attribute(kv.key.as_str(), &kv.value)).collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue`. 64-bit integers travel as strings.
fn any_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) | _ => json!({ "stringValue": value.to_string() }),
    }
}

const fn kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

impl std::fmt::Debug for OtlpJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpJson").field("scope", &self.scope).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "vagas")]);
        let doc = OtlpJson::new(resource, "vagas").encode(&[]);

        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], "vagas");
        assert!(scope["spans"].as_array().unwrap().is_empty());

        let attrs = doc["resourceSpans"][0]["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.iter().any(|a| a["key"] == "service.name"
            && a["value"]["stringValue"] == "vagas"));
    }

    #[test]
    fn integers_are_encoded_as_strings() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
    }

    #[test]
    fn timestamps_before_epoch_become_zero() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_nanos(1500)), "1500");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }
}
