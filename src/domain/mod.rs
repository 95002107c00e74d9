//! Domain layer for the vagas engine.
//!
//! This module contains the core domain types, independent of any rendering
//! surface or runtime.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Job listing record model and attribute parsing
//! - [`validation`]: Application form field rules and phone formatting
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use vagas::domain::{ListingRecord, Tipo};
//!
//! let mut attrs = BTreeMap::new();
//! attrs.insert("data-tipo".to_string(), "estagio".to_string());
//! attrs.insert("data-titulo".to_string(), "Estagiário de TI".to_string());
//!
//! let record = ListingRecord::from_attributes("vaga-1", &attrs);
//! assert_eq!(record.tipo, Tipo::Estagio);
//! ```

pub mod error;
pub mod listing;
pub mod validation;

pub use error::{Result, VagasError};
pub use listing::{sentinel_date, ListingRecord, Modo, Tipo, SENTINEL_DATE};
