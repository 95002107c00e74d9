//! The listing query engine.
//!
//! Filtering, ordering and pagination are pure functions over the immutable
//! record catalog. Callers keep a [`QueryState`], and whenever it changes they
//! run [`filter_records`], then [`sort_indices`], then [`paginate`] to rebuild
//! the visible page.
//!
//! # Examples
//!
//! ```
//! use vagas::domain::ListingRecord;
//! use vagas::query::{filter_records, paginate, sort_indices, FilterGroup, QueryState};
//! use std::collections::BTreeMap;
//!
//! let records: Vec<ListingRecord> = ["remoto", "presencial", "remoto"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, modo)| {
//!         let attrs = BTreeMap::from([("data-modo".to_string(), modo.to_string())]);
//!         ListingRecord::from_attributes(format!("vaga-{i}"), &attrs)
//!     })
//!     .collect();
//!
//! let mut query = QueryState::default();
//! query.select_filter(FilterGroup::Modo, "remoto");
//!
//! let mut hits = filter_records(&records, &query);
//! sort_indices(&records, &mut hits, query.sort_key);
//! let page = paginate(&hits, query.current_page, 6);
//! assert_eq!(page.total, 2);
//! ```

pub mod pagination;
pub mod predicate;
pub mod sort;
pub mod state;

pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use predicate::{filter_records, matches};
pub use sort::{compare, compare_titles, sort_indices, SortKey};
pub use state::{normalize_search_term, ActiveFilters, FilterGroup, QueryState, AREA_WILDCARD, WILDCARD};
