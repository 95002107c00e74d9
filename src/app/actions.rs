//! Side effects requested by the event handler.
//!
//! The handler never performs I/O. Anything outside pure state changes is
//! returned as an [`Action`] for the driver to execute.

use super::form::ApplicationPayload;

/// A side effect for the driver to carry out after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Bring the listing area back into view after a page change.
    ScrollToList,

    /// A validated application ready to be recorded.
    ///
    /// Applications are only logged; nothing is sent anywhere.
    SubmitApplication(ApplicationPayload),

    /// Stop the driver loop.
    Quit,
}
