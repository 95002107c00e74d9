//! Listing catalog sources.
//!
//! A catalog is a JSON array of attribute maps, one per listing card, keyed by
//! the card's `data-*` attribute names:
//!
//! ```json
//! [
//!   {
//!     "data-id": "vaga-dados-jr",
//!     "data-titulo": "Analista de Dados Júnior",
//!     "data-modo": "remoto",
//!     "data-tipo": "clt",
//!     "data-area": "dados",
//!     "data-date": "2025-03-10",
//!     "data-requisitos": "SQL | Python | Power BI"
//!   }
//! ]
//! ```
//!
//! Scalar values that are not strings (numbers, booleans) are kept in their
//! JSON text form. Arrays are joined with `|` so they read like list
//! attributes. Entries without `data-id`/`id` get `vaga-<position>`, counting
//! from 1.

use crate::domain::error::{Result, VagasError};
use crate::domain::ListingRecord;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

const BUILTIN_CATALOG: &str = include_str!("../../data/vagas.json");

/// A source of listing records.
pub trait Catalog {
    /// Loads every record, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read, is not a JSON array of
    /// objects, or repeats an id.
    fn load(&self) -> Result<Vec<ListingRecord>>;
}

/// Catalog read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Catalog for JsonCatalog {
    fn load(&self) -> Result<Vec<ListingRecord>> {
        tracing::debug!(path = ?self.path, "loading catalog file");
        let contents = std::fs::read_to_string(&self.path)?;
        parse_catalog(&contents)
    }
}

/// Demo catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl Catalog for BuiltinCatalog {
    fn load(&self) -> Result<Vec<ListingRecord>> {
        parse_catalog(BUILTIN_CATALOG)
    }
}

/// Parses a catalog document into records.
///
/// # Errors
///
/// Returns [`VagasError::Json`] for malformed JSON and [`VagasError::Catalog`]
/// when the document is not an array of objects or an id repeats.
pub fn parse_catalog(json: &str) -> Result<Vec<ListingRecord>> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());

    for (position, entry) in entries.iter().enumerate() {
        let Value::Object(fields) = entry else {
            return Err(VagasError::Catalog(format!(
                "entry {} is not an object",
                position + 1
            )));
        };

        let attrs: BTreeMap<String, String> = fields
            .iter()
            .filter_map(|(key, value)| attribute_text(value).map(|text| (key.clone(), text)))
            .collect();

        let id = attrs
            .get("data-id")
            .or_else(|| attrs.get("id"))
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("vaga-{}", position + 1));

        if !seen.insert(id.clone()) {
            return Err(VagasError::Catalog(format!("duplicate listing id: {id}")));
        }

        if !attrs.contains_key("data-titulo") {
            tracing::warn!(id = %id, "listing has no title");
        }

        records.push(ListingRecord::from_attributes(id, &attrs));
    }

    tracing::debug!(count = records.len(), "catalog parsed");
    Ok(records)
}

fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(attribute_text)
                .collect::<Vec<_>>()
                .join(" | "),
        ),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Modo, Tipo};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_catalog_parses() {
        let records = BuiltinCatalog.load().unwrap();
        assert!(records.len() > 6);
        let ids: HashSet<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn missing_ids_fall_back_to_position() {
        let records = parse_catalog(
            r#"[{"data-titulo": "A"}, {"id": "fixa", "data-titulo": "B"}, {"data-titulo": "C"}]"#,
        )
        .unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["vaga-1", "fixa", "vaga-3"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse_catalog(r#"[{"data-id": "x"}, {"data-id": "x"}]"#).unwrap_err();
        assert!(matches!(err, VagasError::Catalog(ref msg) if msg.contains("x")));
    }

    #[test]
    fn non_object_entry_is_rejected() {
        let err = parse_catalog(r#"[{"data-id": "x"}, 3]"#).unwrap_err();
        assert!(matches!(err, VagasError::Catalog(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(parse_catalog("[{"), Err(VagasError::Json(_))));
    }

    #[test]
    fn arrays_become_list_attributes() {
        let records =
            parse_catalog(r#"[{"data-requisitos": ["Rust", " ", "SQL"], "data-modo": "hibrido"}]"#)
                .unwrap();
        assert_eq!(records[0].requisitos, ["Rust", "SQL"]);
        assert_eq!(records[0].modo, Modo::Hibrido);
    }

    #[test]
    fn json_file_loads() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"data-id": "v1", "data-tipo": "estagio"}}]"#).unwrap();

        let records = JsonCatalog::new(file.path()).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tipo, Tipo::Estagio);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonCatalog::new(dir.path().join("nada.json")).load();
        assert!(matches!(result, Err(VagasError::Io(_))));
    }
}
