//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the page knows: the
//! immutable record catalog, the user's query selections, the derived result,
//! the open overlay with its scroll lock, the application form and the
//! pending timers. The event handler mutates it; render sinks only ever see
//! the [`UIViewModel`](crate::ui::viewmodel::UIViewModel) it computes.
//!
//! # Derived state
//!
//! `filtered` holds indices into `records`. It is rebuilt from scratch by
//! [`AppState::refresh`] after every query change: predicate filter first,
//! then a stable sort by the active key. Nothing patches it incrementally.
//!
//! # Example
//!
//! ```rust
//! use vagas::app::AppState;
//! use vagas::query::FilterGroup;
//!
//! let mut state = AppState::new(vec![]);
//! state.select_filter(FilterGroup::Modo, "remoto");
//! let vm = state.compute_viewmodel();
//! assert!(vm.empty_state.is_some());
//! ```

use super::form::{ApplicationForm, ApplicationPayload, FormField};
use super::modal::{DetailView, ScrollLock};
use super::modes::ModalState;
use crate::domain::ListingRecord;
use crate::infrastructure::{CancellableTimer, Debouncer};
use crate::query::{
    filter_records, paginate, sort_indices, FilterGroup, Page, QueryState, SortKey,
    DEFAULT_PAGE_SIZE,
};
use crate::ui::helpers::match_ranges;
use crate::ui::viewmodel::{
    ApplicationView, DisplayItem, EmptyState, FieldView, FilterGroupView, FilterOption, FooterInfo,
    HeaderInfo, ModalView, NotificationInfo, PaginationInfo, SearchBarInfo, SortOption, UIViewModel,
};
use std::time::{Duration, Instant};

/// Quiet period before typed search text is applied.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
/// How long the success banner stays up.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);

/// Success banner text.
pub const SUCCESS_MESSAGE: &str = "Candidatura enviada com sucesso! Entraremos em contato em breve.";
/// Title used when the application form is opened without a displayed listing.
pub const APPLICATION_TITLE_FALLBACK: &str = "Vaga";

const EMPTY_MESSAGE: &str = "Nenhuma vaga encontrada";
const EMPTY_SUBTITLE: &str = "Tente ajustar os filtros ou o termo de busca.";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every listing, in catalog order. Never mutated after load.
    pub records: Vec<ListingRecord>,

    /// Indices into `records` passing the current query, in sort order.
    pub filtered: Vec<usize>,

    /// Filter, search, ordering and page selections.
    pub query: QueryState,

    /// Listings per page, at least 1.
    pub page_size: usize,

    /// Search box contents as typed; applied to `query` after the debounce.
    pub search_input: String,
    search_debouncer: Debouncer<String>,

    /// Which overlay is open, if any.
    pub modal: ModalState,

    /// Held once per open overlay; the page does not scroll while locked.
    pub scroll_lock: ScrollLock,

    /// Application form values and per-field errors.
    ///
    /// Reset every time the form opens.
    pub form: ApplicationForm,

    notification_visible: bool,
    notification_timer: CancellableTimer,

    /// Filter options per group, computed once from the catalog.
    filter_values: Vec<(FilterGroup, Vec<String>)>,
}

impl AppState {
    /// Creates the state for `records` with default timings and page size,
    /// already filtered and sorted by the default key.
    ///
    /// # Parameters
    ///
    /// * `records` - The catalog, in page order
    ///
    /// # Returns
    ///
    /// State with no filters, an empty search, page 1 and no overlay.
    #[must_use]
    pub fn new(records: Vec<ListingRecord>) -> Self {
        let filter_values = FilterGroup::ALL
            .iter()
            .map(|&group| (group, distinct_values(&records, group)))
            .collect();

        let mut state = Self {
            records,
            filtered: vec![],
            query: QueryState::default(),
            page_size: DEFAULT_PAGE_SIZE,
            search_input: String::new(),
            search_debouncer: Debouncer::new(DEFAULT_SEARCH_DEBOUNCE),
            modal: ModalState::Closed,
            scroll_lock: ScrollLock::default(),
            form: ApplicationForm::default(),
            notification_visible: false,
            notification_timer: CancellableTimer::new(DEFAULT_NOTIFICATION_DURATION),
            filter_values,
        };
        state.refresh();
        state
    }

    /// Overrides the page size. Zero is raised to 1.
    ///
    /// Call before any paging; the current page is not revalidated.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Overrides the quiet period before typed search text is applied.
    ///
    /// # Parameters
    ///
    /// * `delay` - Quiet period; `Duration::ZERO` applies on the next tick
    #[must_use]
    pub fn with_search_debounce(mut self, delay: Duration) -> Self {
        self.search_debouncer = Debouncer::new(delay);
        self
    }

    /// Overrides how long the success banner stays up.
    #[must_use]
    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_timer = CancellableTimer::new(duration);
        self
    }

    /// Recomputes `filtered` from the full catalog and the current query.
    pub fn refresh(&mut self) {
        let _span = tracing::debug_span!("refresh",
            total_records = self.records.len(),
            search_len = self.query.search_term.len(),
            sort_key = %self.query.sort_key
        )
        .entered();

        let mut hits = filter_records(&self.records, &self.query);
        sort_indices(&self.records, &mut hits, self.query.sort_key);
        self.filtered = hits;

        tracing::debug!(filtered_count = self.filtered.len(), "result recomputed");
    }

    /// Records of the current result, in display order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &ListingRecord> {
        self.filtered.iter().map(move |&idx| &self.records[idx])
    }

    /// The current page of record indices.
    #[must_use]
    pub fn current_page(&self) -> Page<usize> {
        paginate(&self.filtered, self.query.current_page, self.page_size)
    }

    /// Activates a filter control and recomputes the result from page 1.
    ///
    /// # Parameters
    ///
    /// * `group` - Group the control belongs to
    /// * `value` - The control's value; a wildcard clears the group
    pub fn select_filter(&mut self, group: FilterGroup, value: &str) {
        self.query.select_filter(group, value);
        self.refresh();
    }

    /// Reorders the result by `key` and returns to page 1.
    pub fn set_sort(&mut self, key: SortKey) {
        self.query.set_sort_key(key);
        self.refresh();
    }

    /// Records typed text and (re)starts the search debounce.
    ///
    /// The result is untouched until [`AppState::tick`] reaches the end of
    /// the quiet period or [`AppState::flush_search`] is called.
    ///
    /// # Parameters
    ///
    /// * `text` - Full search box contents, not a delta
    /// * `now` - When the keystroke happened
    pub fn type_search(&mut self, text: &str, now: Instant) {
        self.search_input = text.to_string();
        self.search_debouncer.call(text.to_string(), now);
    }

    /// Applies a search term immediately, bypassing the debounce.
    ///
    /// # Parameters
    ///
    /// * `text` - Raw search text; lowercased and trimmed before use
    pub fn apply_search(&mut self, text: &str) {
        self.query.set_search_term(text);
        self.refresh();
    }

    /// Applies typed search text that is still waiting out its debounce.
    ///
    /// # Returns
    ///
    /// `true` if a pending search was applied.
    pub fn flush_search(&mut self) -> bool {
        let Some(text) = self.search_debouncer.flush() else {
            return false;
        };
        tracing::debug!(query = %text, "pending search flushed");
        self.apply_search(&text);
        true
    }

    /// Whether typed text is still waiting out its debounce.
    #[must_use]
    pub const fn search_pending(&self) -> bool {
        self.search_debouncer.is_pending()
    }

    /// Advances one page.
    ///
    /// # Returns
    ///
    /// `false` on the last page or an empty result, where nothing changes.
    pub fn next_page(&mut self) -> bool {
        if !self.current_page().next_enabled() {
            return false;
        }
        self.query.go_to_page(self.query.current_page + 1);
        true
    }

    /// Goes back one page.
    ///
    /// # Returns
    ///
    /// `false` on the first page, where nothing changes.
    pub fn prev_page(&mut self) -> bool {
        if !self.current_page().prev_enabled() {
            return false;
        }
        self.query.go_to_page(self.query.current_page - 1);
        true
    }

    /// Opens the detail overlay for the listing `id`.
    ///
    /// Unknown ids are ignored. Any overlay already open is closed first so the
    /// scroll lock keeps exactly one holder.
    ///
    /// # Parameters
    ///
    /// * `id` - Listing id, matched exactly
    ///
    /// # Returns
    ///
    /// `true` if the overlay opened.
    pub fn open_detail(&mut self, id: &str) -> bool {
        let Some(record) = self.records.iter().find(|r| r.id == id) else {
            tracing::debug!(id = %id, "no listing with this id");
            return false;
        };
        let view = DetailView::from_record(record);

        self.close_modal();
        self.modal = ModalState::Detail(view);
        self.scroll_lock.acquire();
        tracing::debug!(id = %id, "detail opened");
        true
    }

    /// Closes whichever overlay is open; returns whether one was.
    pub fn close_modal(&mut self) -> bool {
        if !self.modal.is_open() {
            return false;
        }
        tracing::debug!(modal = self.modal.kind(), "closing overlay");
        self.modal = ModalState::Closed;
        self.scroll_lock.release();
        true
    }

    /// Switches from the detail overlay to the application form.
    ///
    /// With no detail open the form is titled [`APPLICATION_TITLE_FALLBACK`].
    /// Does nothing while the form is already open.
    ///
    /// # Returns
    ///
    /// `true` if the form opened.
    pub fn apply_to_displayed(&mut self) -> bool {
        let vaga_title = match &self.modal {
            ModalState::Application { .. } => return false,
            ModalState::Detail(view) => view.titulo.clone(),
            ModalState::Closed => APPLICATION_TITLE_FALLBACK.to_string(),
        };
        self.close_modal();
        self.open_application(vaga_title);
        true
    }

    fn open_application(&mut self, vaga_title: String) {
        self.form.reset();
        tracing::debug!(vaga = %vaga_title, "application form opened");
        self.modal = ModalState::Application { vaga_title };
        self.scroll_lock.acquire();
    }

    /// Forwards a keystroke to the form. Ignored unless the form is open.
    ///
    /// # Parameters
    ///
    /// * `field` - Field being edited
    /// * `value` - Full field contents after the keystroke
    ///
    /// # Returns
    ///
    /// `true` if the form was open and took the value.
    pub fn field_input(&mut self, field: FormField, value: &str) -> bool {
        if !matches!(self.modal, ModalState::Application { .. }) {
            return false;
        }
        self.form.on_input(field, value);
        true
    }

    /// Validates one field on blur. Ignored unless the form is open.
    ///
    /// # Returns
    ///
    /// `true` if the form was open and the field was validated.
    pub fn field_blur(&mut self, field: FormField) -> bool {
        if !matches!(self.modal, ModalState::Application { .. }) {
            return false;
        }
        self.form.on_blur(field);
        true
    }

    /// Validates the whole form and, when it passes, closes the overlay and
    /// shows the success banner.
    ///
    /// # Parameters
    ///
    /// * `now` - Start of the banner's display time
    ///
    /// # Returns
    ///
    /// The submitted application, or `None` when the form is closed or any
    /// field failed. A failed submit leaves the form open with every error
    /// shown.
    pub fn submit(&mut self, now: Instant) -> Option<ApplicationPayload> {
        let ModalState::Application { vaga_title } = &self.modal else {
            return None;
        };
        let vaga_title = vaga_title.clone();

        if !self.form.validate_all() {
            tracing::debug!("application rejected by validation");
            return None;
        }

        let payload = self.form.payload(&vaga_title);
        self.close_modal();
        self.show_notification(now);
        Some(payload)
    }

    fn show_notification(&mut self, now: Instant) {
        self.notification_visible = true;
        self.notification_timer.schedule(now);
    }

    /// Whether the success banner is showing.
    #[must_use]
    pub const fn notification_visible(&self) -> bool {
        self.notification_visible
    }

    /// Fires any timers due at `now`.
    ///
    /// # Parameters
    ///
    /// * `now` - Current time; timers only fire once it reaches their deadline
    ///
    /// # Returns
    ///
    /// `true` if a debounced search was applied or the banner was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(text) = self.search_debouncer.poll(now) {
            tracing::debug!(query = %text, "debounced search applied");
            self.apply_search(&text);
            changed = true;
        }

        if self.notification_timer.poll(now) {
            self.notification_visible = false;
            changed = true;
        }

        changed
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Pure projection: calling it twice without an event in between yields
    /// equal view models.
    ///
    /// # Returns
    ///
    /// Everything a render sink needs, with no references back into the
    /// state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let page = self.current_page();

        let display_items = page
            .visible
            .iter()
            .map(|&idx| self.compute_display_item(&self.records[idx]))
            .collect();

        let empty_state = page.is_empty().then(|| EmptyState {
            message: EMPTY_MESSAGE.to_string(),
            subtitle: EMPTY_SUBTITLE.to_string(),
        });

        UIViewModel {
            header: HeaderInfo {
                title: "Vagas".to_string(),
                result_count: self.filtered.len(),
            },
            search_bar: SearchBarInfo {
                query: self.search_input.clone(),
                pending: self.search_pending(),
            },
            filter_groups: self.compute_filter_groups(),
            sort_options: SortKey::ALL
                .iter()
                .map(|&key| SortOption {
                    key,
                    label: key.label().to_string(),
                    is_selected: key == self.query.sort_key,
                })
                .collect(),
            display_items,
            pagination: PaginationInfo {
                current_page: page.page_number,
                total_pages: page.display_total(),
                prev_enabled: page.prev_enabled(),
                next_enabled: page.next_enabled(),
                visible: page.controls_visible(),
            },
            empty_state,
            modal: self.compute_modal(),
            notification: self.notification_visible.then(|| NotificationInfo {
                message: SUCCESS_MESSAGE.to_string(),
            }),
            scroll_locked: self.scroll_lock.is_locked(),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_item(&self, record: &ListingRecord) -> DisplayItem {
        DisplayItem {
            id: record.id.clone(),
            titulo: record.titulo.clone(),
            tag: record.tipo.label().to_string(),
            modo: record.modo.label().to_string(),
            area: record.area.clone(),
            localizacao: record.localizacao.clone(),
            date: record
                .date
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default(),
            highlight_ranges: match_ranges(&record.titulo, &self.query.search_term),
        }
    }

    fn compute_filter_groups(&self) -> Vec<FilterGroupView> {
        self.filter_values
            .iter()
            .map(|(group, values)| {
                let group = *group;
                let active = self.query.filters.get(group);
                let wildcard = group.default_wildcard();

                let wildcard_option = FilterOption {
                    value: wildcard.to_string(),
                    label: option_label(group, wildcard),
                    is_active: active.map_or(true, |a| group.is_wildcard(a)),
                };
                let value_options = values.iter().map(|value| FilterOption {
                    value: value.clone(),
                    label: option_label(group, value),
                    is_active: active == Some(value.as_str()),
                });

                FilterGroupView {
                    group,
                    label: group.label().to_string(),
                    options: std::iter::once(wildcard_option).chain(value_options).collect(),
                }
            })
            .collect()
    }

    fn compute_modal(&self) -> Option<ModalView> {
        match &self.modal {
            ModalState::Closed => None,
            ModalState::Detail(view) => Some(ModalView::Detail(view.clone())),
            ModalState::Application { vaga_title } => Some(ModalView::Application(ApplicationView {
                vaga_title: vaga_title.clone(),
                fields: FormField::ALL
                    .iter()
                    .map(|&field| {
                        let state = self.form.field(field);
                        FieldView {
                            field,
                            label: field.label().to_string(),
                            value: state.value.clone(),
                            required: field.is_required(),
                            error: state.error_text(),
                            invalid: state.is_invalid(),
                        }
                    })
                    .collect(),
            })),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.modal {
            ModalState::Closed => {
                "busca <texto>  filtro <grupo> <valor>  ordem <chave>  prox/ant  abrir <id>  q: sair"
            }
            ModalState::Detail(_) => "candidatar  fechar  fundo  esc",
            ModalState::Application { .. } => {
                "campo <campo> <valor>  sair <campo>  enviar  fechar  esc"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Distinct values of `group` across `records`, in first-seen order.
fn distinct_values(records: &[ListingRecord], group: FilterGroup) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        let value = match group {
            FilterGroup::Modo => record.modo.as_str(),
            FilterGroup::Tipo => record.tipo.as_str(),
            FilterGroup::Area => record.area.as_str(),
        };
        if !value.is_empty() && !group.is_wildcard(value) && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
    values
}

fn option_label(group: FilterGroup, value: &str) -> String {
    if group.is_wildcard(value) {
        return capitalize(value);
    }
    match group {
        FilterGroup::Modo => crate::domain::Modo::from(value).label().to_string(),
        FilterGroup::Tipo => match crate::domain::Tipo::from(value) {
            crate::domain::Tipo::Other(code) => code,
            tipo => tipo.label().to_string(),
        },
        FilterGroup::Area => capitalize(value),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
