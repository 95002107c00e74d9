//! Vagas: a filterable, paginated job-listing board with a validated
//! application form.
//!
//! The crate holds the whole behavior of the board independent of any
//! rendering surface:
//! - Search, three filter groups and four sort orders over a fixed catalog
//! - Six-per-page pagination with scroll-to-list on navigation
//! - A detail overlay and an application form sharing one scroll lock
//! - Field validation with Brazilian phone formatting
//! - A debounced search box and an auto-hiding success banner
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal driver (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Overlays, form, timers                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Storage Layer │
//! │ (ui/)         │   │ (query/)      │   │ (storage/)    │
//! │ - Render sink │   │ - Predicates  │   │ - JSON catalog│
//! │ - Theming     │   │ - Sorting     │   │ - Demo data   │
//! │ - Components  │   │ - Pagination  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths and timers (infrastructure/)               │
//! │  - Listing model, validation, errors (domain/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The binary takes `key=value` arguments, optionally on top of a TOML file
//! given as `config=<path>`:
//!
//! ```toml
//! catalog_path = "~/vagas.json"
//! page_size = 6
//! search_debounce_ms = 300
//! notification_ms = 4000
//! theme = "catppuccin-latte"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use vagas::{handle_event, initialize, Config, Event};
//! use vagas::query::FilterGroup;
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(
//!     &mut state,
//!     &Event::SelectFilter { group: FilterGroup::Tipo, value: "estagio".into() },
//! )?;
//! assert!(state.filtered_records().all(|r| r.tipo.as_str() == "estagio"));
//! # Ok::<(), vagas::VagasError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod query;
pub mod storage;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{ListingRecord, Result, VagasError};
pub use ui::Theme;

use infrastructure::expand_tilde;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use storage::{BuiltinCatalog, Catalog, JsonCatalog};

/// Runtime configuration.
///
/// Built from `key=value` arguments ([`Config::from_map`]), a TOML file
/// ([`Config::from_file`]), or both ([`Config::load`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to load. The built-in demo catalog is used when unset or
    /// unreadable.
    pub catalog_path: Option<String>,

    /// Listings per page. Default: 6
    pub page_size: usize,

    /// Quiet period before typed search text applies. Default: 300
    pub search_debounce_ms: u64,

    /// How long the success banner stays up. Default: 4000
    pub notification_ms: u64,

    /// Built-in theme name. Ignored if `theme_file` is set.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: query::DEFAULT_PAGE_SIZE,
            search_debounce_ms: 300,
            notification_ms: 4000,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// On-disk form of [`Config`]; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    catalog_path: Option<String>,
    page_size: Option<usize>,
    search_debounce_ms: Option<u64>,
    notification_ms: Option<u64>,
    #[serde(alias = "theme")]
    theme_name: Option<String>,
    theme_file: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Parses `key=value` pairs over the defaults.
    ///
    /// Numbers that fail to parse, and a zero page size, keep the default.
    /// The theme may be given as `theme` or `theme_name`.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use vagas::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "10".to_string());
    /// map.insert("notification_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 10);
    /// assert_eq!(config.notification_ms, 4000);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().overridden_by(map)
    }

    /// Parses a TOML document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VagasError::Config`] for malformed TOML, unknown keys or a
    /// zero page size.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| VagasError::Config(e.to_string()))?;

        if file.page_size == Some(0) {
            return Err(VagasError::Config("page_size must be at least 1".to_string()));
        }

        let defaults = Self::default();
        Ok(Self {
            catalog_path: file.catalog_path,
            page_size: file.page_size.unwrap_or(defaults.page_size),
            search_debounce_ms: file.search_debounce_ms.unwrap_or(defaults.search_debounce_ms),
            notification_ms: file.notification_ms.unwrap_or(defaults.notification_ms),
            theme_name: file.theme_name,
            theme_file: file.theme_file,
            trace_level: file.trace_level,
        })
    }

    /// Reads a TOML configuration file. A leading `~` is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`VagasError::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_toml_str`].
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(expand_tilde(path))?;
        Self::from_toml_str(&contents)
    }

    /// Builds the configuration from command-line pairs.
    ///
    /// A `config` entry names a TOML file loaded first; every other entry
    /// overrides it.
    ///
    /// # Errors
    ///
    /// Returns an error only when the named configuration file is unusable.
    pub fn load(map: &BTreeMap<String, String>) -> Result<Self> {
        let base = match map.get("config") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.overridden_by(map))
    }

    #[must_use]
    fn overridden_by(mut self, map: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        if let Some(path) = text("catalog_path") {
            self.catalog_path = Some(path.to_string());
        }
        if let Some(size) = text("page_size").and_then(|v| v.parse::<usize>().ok()) {
            if size > 0 {
                self.page_size = size;
            }
        }
        if let Some(ms) = text("search_debounce_ms").and_then(|v| v.parse().ok()) {
            self.search_debounce_ms = ms;
        }
        if let Some(ms) = text("notification_ms").and_then(|v| v.parse().ok()) {
            self.notification_ms = ms;
        }
        if let Some(name) = text("theme").or_else(|| text("theme_name")) {
            self.theme_name = Some(name.to_string());
        }
        if let Some(path) = text("theme_file") {
            self.theme_file = Some(path.to_string());
        }
        if let Some(level) = text("trace_level") {
            self.trace_level = Some(level.to_string());
        }
        self
    }
}

/// Loads the catalog and builds the initial state.
///
/// An unreadable `catalog_path` falls back to the built-in catalog with a
/// warning.
///
/// # Errors
///
/// Returns an error if the built-in catalog fails to parse.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(?config, "initializing vagas");

    let records = load_records(config)?;
    tracing::info!(count = records.len(), "catalog loaded");

    Ok(AppState::new(records)
        .with_page_size(config.page_size)
        .with_search_debounce(Duration::from_millis(config.search_debounce_ms))
        .with_notification_duration(Duration::from_millis(config.notification_ms)))
}

fn load_records(config: &Config) -> Result<Vec<ListingRecord>> {
    if let Some(path) = &config.catalog_path {
        match JsonCatalog::new(expand_tilde(path)).load() {
            Ok(records) => return Ok(records),
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "catalog unreadable, using built-in listings");
            }
        }
    }
    BuiltinCatalog.load()
}

/// Resolves the terminal theme: file first, then name, then the default.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(file) = &config.theme_file {
        match Theme::from_file(expand_tilde(file)) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %file, error = %e, "failed to load theme file, using default");
                return Theme::default();
            }
        }
    }

    config.theme_name.as_deref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}
