//! Infrastructure layer for environment and clock interactions.
//!
//! - [`paths`]: data directory resolution and tilde expansion
//! - [`timer`]: cancellable timers and the search debouncer

pub mod paths;
pub mod timer;

pub use paths::{expand_tilde, get_data_dir};
pub use timer::{CancellableTimer, Debouncer};
