//! Job listing ("vaga") domain model.
//!
//! A [`ListingRecord`] is built once from the `data-*` attributes of a rendered
//! listing card and never changes afterwards. Unknown `modo`/`tipo` codes are
//! kept verbatim so filters can still compare them exactly, and a missing or
//! unparseable posting date falls back to [`sentinel_date`] when ordering.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fallback posting date used for ordering when `data-date` is absent.
pub const SENTINEL_DATE: (i32, u32, u32) = (2025, 1, 1);

/// Separator used by `data-requisitos` and `data-beneficios`.
const LIST_SEPARATOR: char = '|';

/// Returns [`SENTINEL_DATE`] as a calendar date.
#[must_use]
pub fn sentinel_date() -> NaiveDate {
    let (year, month, day) = SENTINEL_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Work arrangement of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Modo {
    Remoto,
    Hibrido,
    Presencial,
    /// Any code outside the known set, kept as written in the markup.
    Other(String),
}

impl Modo {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Remoto => "remoto",
            Self::Hibrido => "hibrido",
            Self::Presencial => "presencial",
            Self::Other(code) => code,
        }
    }

    /// Human label for filter buttons and listing cards.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Remoto => "Remoto",
            Self::Hibrido => "Híbrido",
            Self::Presencial => "Presencial",
            Self::Other(code) => code,
        }
    }
}

impl From<&str> for Modo {
    fn from(code: &str) -> Self {
        match code {
            "remoto" => Self::Remoto,
            "hibrido" => Self::Hibrido,
            "presencial" => Self::Presencial,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Modo {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<Modo> for String {
    fn from(modo: Modo) -> Self {
        modo.as_str().to_string()
    }
}

impl fmt::Display for Modo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract type of a listing.
///
/// The declaration order is also the ranking used by the `tipo` sort; see
/// [`Tipo::rank`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tipo {
    Efetivo,
    Estagio,
    Banco,
    Other(String),
}

impl Tipo {
    /// Rank used by the `tipo` sort. Unknown codes rank last.
    #[must_use]
    pub const fn rank(&self) -> u32 {
        match self {
            Self::Efetivo => 1,
            Self::Estagio => 2,
            Self::Banco => 3,
            Self::Other(_) => 999,
        }
    }

    /// Human label shown on the detail modal tag.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Estagio => "Estágio",
            Self::Efetivo => "Efetivo",
            Self::Banco | Self::Other(_) => "Banco de Talentos",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Efetivo => "efetivo",
            Self::Estagio => "estagio",
            Self::Banco => "banco",
            Self::Other(code) => code,
        }
    }
}

impl From<&str> for Tipo {
    fn from(code: &str) -> Self {
        match code {
            "efetivo" => Self::Efetivo,
            "estagio" => Self::Estagio,
            "banco" => Self::Banco,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Tipo {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<Tipo> for String {
    fn from(tipo: Tipo) -> Self {
        tipo.as_str().to_string()
    }
}

impl fmt::Display for Tipo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single job listing as read from the page markup.
///
/// # Fields
///
/// - `id`: Stable identifier, unique within the loaded catalog
/// - `date`: Posting date; `None` when absent or unparseable
/// - `requisitos` / `beneficios`: Trimmed, non-blank list items in markup order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub modo: Modo,
    pub tipo: Tipo,
    pub area: String,
    pub titulo: String,
    pub descricao: String,
    pub localizacao: String,
    pub date: Option<NaiveDate>,
    pub requisitos: Vec<String>,
    pub beneficios: Vec<String>,
}

impl ListingRecord {
    /// Builds a record from a card's `data-*` attribute map.
    ///
    /// Missing attributes become empty strings or empty lists. A `data-date`
    /// that is neither `YYYY-MM-DD` nor RFC 3339 is dropped with a warning.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use vagas::domain::{ListingRecord, Modo};
    ///
    /// let attrs: BTreeMap<String, String> = [
    ///     ("data-modo", "remoto"),
    ///     ("data-requisitos", "Rust | SQL || Git"),
    ///     ("data-date", "2025-03-10"),
    /// ]
    /// .into_iter()
    /// .map(|(k, v)| (k.to_string(), v.to_string()))
    /// .collect();
    ///
    /// let record = ListingRecord::from_attributes("vaga-7", &attrs);
    /// assert_eq!(record.modo, Modo::Remoto);
    /// assert_eq!(record.requisitos, vec!["Rust", "SQL", "Git"]);
    /// assert!(record.date.is_some());
    /// ```
    #[must_use]
    pub fn from_attributes(id: impl Into<String>, attrs: &BTreeMap<String, String>) -> Self {
        let id = id.into();
        let text = |key: &str| attrs.get(key).map(|v| v.trim().to_string()).unwrap_or_default();

        let date = attrs
            .get("data-date")
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| {
                let parsed = parse_posting_date(raw);
                if parsed.is_none() {
                    tracing::warn!(id = %id, raw_date = %raw, "unparseable posting date, using sentinel for ordering");
                }
                parsed
            });

        Self {
            modo: Modo::from(text("data-modo")),
            tipo: Tipo::from(text("data-tipo")),
            area: text("data-area"),
            titulo: text("data-titulo"),
            descricao: text("data-descricao"),
            localizacao: text("data-localizacao"),
            date,
            requisitos: split_list(attrs.get("data-requisitos").map(String::as_str)),
            beneficios: split_list(attrs.get("data-beneficios").map(String::as_str)),
            id,
        }
    }

    /// Date used by the recency sorts.
    #[must_use]
    pub fn sort_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(sentinel_date)
    }
}

fn parse_posting_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map_or_else(Vec::new, |value| {
        value
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    })
}
