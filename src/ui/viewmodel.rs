//! View model types representing renderable UI state.
//!
//! A [`UIViewModel`] is regenerated from scratch by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! after every state change. It carries display-ready data only: labels are
//! already localized, flags like `is_active` mirror the `aria-pressed` /
//! `aria-invalid` attributes of the page, and highlight ranges are
//! precomputed. Render sinks never consult engine state directly.

use crate::app::form::FormField;
use crate::app::modal::DetailView;
use crate::query::{FilterGroup, SortKey};
use serde::Serialize;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub filter_groups: Vec<FilterGroupView>,
    pub sort_options: Vec<SortOption>,

    /// Records on the current page, in result order.
    pub display_items: Vec<DisplayItem>,
    pub pagination: PaginationInfo,

    /// Present iff the filtered result is empty.
    pub empty_state: Option<EmptyState>,

    /// The open overlay, if any.
    pub modal: Option<ModalView>,
    pub notification: Option<NotificationInfo>,

    /// Whether page scrolling is blocked by an open overlay.
    pub scroll_locked: bool,
    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub title: String,
    /// Size of the filtered result, shown next to the title.
    pub result_count: usize,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarInfo {
    /// Text as typed, before debouncing and normalization.
    pub query: String,
    /// True while a debounced search is waiting to be applied.
    pub pending: bool,
}

/// One group of mutually exclusive filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterGroupView {
    pub group: FilterGroup,
    pub label: String,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    /// Mirrors `aria-pressed`.
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub key: SortKey,
    pub label: String,
    pub is_selected: bool,
}

/// One listing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub id: String,
    pub titulo: String,
    pub tag: String,
    pub modo: String,
    pub area: String,
    pub localizacao: String,
    /// Posting date as `dd/mm/yyyy`, empty when unknown.
    pub date: String,

    /// Character ranges of `titulo` matching the search term.
    ///
    /// Each tuple is `(start, end)` in char indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    pub current_page: usize,
    /// Never below 1, so an empty result reads "Página 1 de 1".
    pub total_pages: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Hidden when the whole result fits on one page.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// The open overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModalView {
    Detail(DetailView),
    Application(ApplicationView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationView {
    pub vaga_title: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: FormField,
    pub label: String,
    pub value: String,
    pub required: bool,
    /// `⚠`-prefixed inline error, when present.
    pub error: Option<String>,
    /// Mirrors `aria-invalid`.
    pub invalid: bool,
}

/// Transient success banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationInfo {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterInfo {
    pub keybindings: String,
}
