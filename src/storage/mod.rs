//! Storage layer for the listing catalog.
//!
//! Records are loaded once at startup and never written back. The
//! [`Catalog`] trait abstracts over where they come from: a JSON file chosen
//! in the configuration, or the demo catalog compiled into the binary.
//!
//! # Modules
//!
//! - `catalog`: Catalog trait, file and built-in sources, and the JSON parser

pub mod catalog;

pub use catalog::{parse_catalog, BuiltinCatalog, Catalog, JsonCatalog};
