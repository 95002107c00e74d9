//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! User Input → Events → handle_event → AppState mutations → Actions → Driver
//!                                           │
//!                                           └→ compute_viewmodel → RenderSink
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`form`]: Application form controller and submitted payload
//! - [`handler`]: Event processing and state transitions
//! - [`modal`]: Detail projection and the scroll lock
//! - [`modes`]: Overlay state machine
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod modal;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use form::{ApplicationForm, ApplicationPayload, FormField};
pub use handler::{handle_event, Event};
pub use modal::{DetailView, ScrollLock};
pub use modes::ModalState;
pub use state::AppState;
