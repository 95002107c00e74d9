//! Query selections: active filters, search term, sort key and current page.
//!
//! [`QueryState`] only records *what the user asked for*. The filtered and
//! sorted record set derived from it lives on
//! [`AppState`](crate::app::AppState) and is rebuilt from scratch every time
//! one of these selections changes.

use super::sort::SortKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard filter value accepted by every group.
pub const WILDCARD: &str = "todos";

/// Feminine wildcard spelling. Only the `area` group treats it as a wildcard.
pub const AREA_WILDCARD: &str = "todas";

/// A group of mutually exclusive filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterGroup {
    /// Work arrangement: remoto, hibrido, presencial.
    Modo,
    /// Contract type: efetivo, estagio, banco.
    Tipo,
    /// Business area, free-form per catalog.
    Area,
}

impl FilterGroup {
    /// Every group, in the order the filter bar shows them.
    pub const ALL: [Self; 3] = [Self::Modo, Self::Tipo, Self::Area];

    /// Returns the group's `data-filter` name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modo => "modo",
            Self::Tipo => "tipo",
            Self::Area => "area",
        }
    }

    /// Parses the `data-filter` name of a control group.
    ///
    /// Matching ignores case and surrounding whitespace, and `área` is
    /// accepted for [`FilterGroup::Area`].
    ///
    /// # Returns
    ///
    /// `None` for names outside the three groups.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "modo" => Some(Self::Modo),
            "tipo" => Some(Self::Tipo),
            "area" | "área" => Some(Self::Area),
            _ => None,
        }
    }

    /// Whether `value` means "any value" for this group.
    ///
    /// `todos` is a wildcard everywhere. `todas` is a wildcard for
    /// [`FilterGroup::Area`] only; in the other groups it is compared like
    /// any other code and therefore matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use vagas::query::FilterGroup;
    ///
    /// assert!(FilterGroup::Area.is_wildcard("todas"));
    /// assert!(!FilterGroup::Modo.is_wildcard("todas"));
    /// ```
    #[must_use]
    pub fn is_wildcard(self, value: &str) -> bool {
        match self {
            Self::Area => value == WILDCARD || value == AREA_WILDCARD,
            Self::Modo | Self::Tipo => value == WILDCARD,
        }
    }

    /// Heading of the group's control bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Modo => "Modalidade",
            Self::Tipo => "Tipo",
            Self::Area => "Área",
        }
    }

    /// The wildcard value a group's controls offer by default.
    #[must_use]
    pub const fn default_wildcard(self) -> &'static str {
        match self {
            Self::Area => AREA_WILDCARD,
            Self::Modo | Self::Tipo => WILDCARD,
        }
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one selected value per filter group.
///
/// `None` means no control of that group was ever activated, which behaves
/// like the wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    /// Selected [`FilterGroup::Modo`] value.
    pub modo: Option<String>,
    /// Selected [`FilterGroup::Tipo`] value.
    pub tipo: Option<String>,
    /// Selected [`FilterGroup::Area`] value.
    pub area: Option<String>,
}

impl ActiveFilters {
    /// Returns the selected value for `group`, or `None` if the group was
    /// never touched.
    #[must_use]
    pub fn get(&self, group: FilterGroup) -> Option<&str> {
        match group {
            FilterGroup::Modo => self.modo.as_deref(),
            FilterGroup::Tipo => self.tipo.as_deref(),
            FilterGroup::Area => self.area.as_deref(),
        }
    }

    /// Selects `value` in `group`, replacing any previous selection there.
    pub fn set(&mut self, group: FilterGroup, value: impl Into<String>) {
        let slot = match group {
            FilterGroup::Modo => &mut self.modo,
            FilterGroup::Tipo => &mut self.tipo,
            FilterGroup::Area => &mut self.area,
        };
        *slot = Some(value.into());
    }
}

/// Everything the user selected that shapes the listing result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Lowercase, trimmed search text. Empty matches everything.
    pub search_term: String,

    /// Selected value per filter group.
    pub filters: ActiveFilters,

    /// Active ordering; [`SortKey::Recente`] until the user picks another.
    pub sort_key: SortKey,

    /// 1-based page number.
    ///
    /// Reset to 1 by every other setter here; only [`QueryState::go_to_page`]
    /// moves it elsewhere.
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: ActiveFilters::default(),
            sort_key: SortKey::default(),
            current_page: 1,
        }
    }
}

impl QueryState {
    /// Activates a filter control and returns to the first page.
    ///
    /// # Parameters
    ///
    /// * `group` - Group the control belongs to
    /// * `value` - The control's `data-value`; surrounding whitespace is dropped
    pub fn select_filter(&mut self, group: FilterGroup, value: &str) {
        self.filters.set(group, value.trim());
        self.current_page = 1;
    }

    /// Stores the normalized search text and returns to the first page.
    ///
    /// # Parameters
    ///
    /// * `raw` - Search box contents as typed; normalized with
    ///   [`normalize_search_term`]
    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = normalize_search_term(raw);
        self.current_page = 1;
    }

    /// Changes the ordering and returns to the first page.
    ///
    /// Selecting the key that is already active still resets the page.
    ///
    /// # Parameters
    ///
    /// * `key` - New ordering
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.current_page = 1;
    }

    /// Moves to `page` without touching filters, search or ordering.
    ///
    /// The upper bound depends on the result size, which this type does not
    /// know; callers check it before calling. Page 0 is clamped to 1.
    ///
    /// # Parameters
    ///
    /// * `page` - 1-based target page
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

/// Lowercases and trims raw search input.
///
/// Accents are kept: `"Estágio"` searches for `"estágio"`, not `"estagio"`.
///
/// # Examples
///
/// ```
/// use vagas::query::state::normalize_search_term;
///
/// assert_eq!(normalize_search_term("  BANCO "), "banco");
/// ```
#[must_use]
pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}
