//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point that mutates [`AppState`] on
//! behalf of the user. Each event maps to one state transition and yields a
//! `should_render` flag plus any [`Action`]s for the driver.
//!
//! # Event Types
//!
//! - **Query**: `SelectFilter`, `SearchInput`, `SetSort`, `NextPage`, `PrevPage`
//! - **Overlay**: `OpenDetail`, `CloseModal`, `OverlayClick`, `Escape`, `Apply`
//! - **Form**: `FieldInput`, `FieldBlur`, `Submit`
//! - **Clock**: `Tick` fires the search debounce and notification timers
//!
//! # Example
//!
//! ```rust
//! use vagas::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(vec![]);
//! let (should_render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(!should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), vagas::VagasError>(())
//! ```

use super::form::FormField;
use super::modes::ModalState;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::query::{FilterGroup, SortKey};
use std::time::Instant;

/// Discrete user or clock events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A filter button in `group` was activated.
    SelectFilter { group: FilterGroup, value: String },
    /// The search box now holds `text`; applied after the debounce.
    SearchInput { text: String, at: Instant },
    /// The ordering select changed.
    SetSort(SortKey),
    /// The "next page" control. Ignored on the last page.
    NextPage,
    /// The "previous page" control. Ignored on the first page.
    PrevPage,

    /// A listing card was activated.
    OpenDetail { id: String },
    /// An explicit close affordance of the open overlay.
    CloseModal,
    /// A click on an overlay; `on_backdrop` is false for clicks on its content.
    OverlayClick { on_backdrop: bool },
    /// The Escape key; closes whichever overlay is open.
    Escape,
    /// The detail overlay's "apply" button.
    Apply,

    /// `field` of the application form now holds `value`.
    FieldInput { field: FormField, value: String },
    /// Focus left `field`; validates it and shows its error, if any.
    FieldBlur(FormField),
    /// Form submission; the engine handles it in place of any navigation.
    Submit { at: Instant },

    /// Clock advance used to fire pending timers.
    Tick(Instant),
    /// End of input. Typed search text still in its debounce is applied
    /// first so the final frame reflects it.
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Events that reference something not on screen (unknown ids, a closed
/// form, a disabled page control) are silent no-ops that do not request a
/// render.
///
/// # Parameters
///
/// * `state` - Application state to update
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`: whether the view model changed, plus the side
/// effects the driver should execute in order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for drivers whose
/// transitions can fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectFilter { group, value } => {
            tracing::debug!(group = %group, value = %value, "filter selected");
            state.select_filter(*group, value);
            Ok((true, vec![]))
        }
        Event::SearchInput { text, at } => {
            state.type_search(text, *at);
            Ok((true, vec![]))
        }
        Event::SetSort(key) => {
            tracing::debug!(sort_key = %key, "sort changed");
            state.set_sort(*key);
            Ok((true, vec![]))
        }
        Event::NextPage => Ok(page_moved(state.next_page())),
        Event::PrevPage => Ok(page_moved(state.prev_page())),
        Event::OpenDetail { id } => Ok((state.open_detail(id), vec![])),
        Event::CloseModal => Ok((state.close_modal(), vec![])),
        Event::OverlayClick { on_backdrop } => {
            if !on_backdrop {
                return Ok((false, vec![]));
            }
            Ok((state.close_modal(), vec![]))
        }
        Event::Escape => {
            if !state.modal.is_open() {
                return Ok((false, vec![]));
            }
            Ok((state.close_modal(), vec![]))
        }
        Event::Apply => {
            if !matches!(state.modal, ModalState::Detail(_)) {
                tracing::debug!(modal = state.modal.kind(), "apply ignored outside detail view");
                return Ok((false, vec![]));
            }
            Ok((state.apply_to_displayed(), vec![]))
        }
        Event::FieldInput { field, value } => Ok((state.field_input(*field, value), vec![])),
        Event::FieldBlur(field) => Ok((state.field_blur(*field), vec![])),
        Event::Submit { at } => {
            if !matches!(state.modal, ModalState::Application { .. }) {
                return Ok((false, vec![]));
            }
            match state.submit(*at) {
                Some(payload) => {
                    tracing::info!(
                        vaga = %payload.vaga,
                        nome = %payload.nome,
                        email = %payload.email,
                        telefone = %payload.telefone,
                        linkedin = %payload.linkedin,
                        "application submitted"
                    );
                    Ok((true, vec![Action::SubmitApplication(payload)]))
                }
                None => Ok((true, vec![])),
            }
        }
        Event::Tick(now) => Ok((state.tick(*now), vec![])),
        Event::Quit => Ok((state.flush_search(), vec![Action::Quit])),
    }
}

fn page_moved(moved: bool) -> (bool, Vec<Action>) {
    if moved {
        (true, vec![Action::ScrollToList])
    } else {
        (false, vec![])
    }
}
