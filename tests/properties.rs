//! Invariants of filtering, sorting and pagination over generated catalogs.

use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use vagas::query::{
    compare, filter_records, matches, paginate, sort_indices, FilterGroup, QueryState, SortKey,
    DEFAULT_PAGE_SIZE,
};
use vagas::{handle_event, AppState, Event, ListingRecord};

fn record_strategy() -> impl Strategy<Value = (String, String, String, String, Option<u32>)> {
    (
        prop::sample::select(vec!["remoto", "hibrido", "presencial", "flex"]),
        prop::sample::select(vec!["efetivo", "estagio", "banco", "pj"]),
        prop::sample::select(vec!["tecnologia", "dados", "design", ""]),
        "[A-Za-zÁÉáéíç ]{0,12}",
        prop::option::of(1u32..=28),
    )
        .prop_map(|(modo, tipo, area, titulo, day)| {
            (modo.to_string(), tipo.to_string(), area.to_string(), titulo, day)
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<ListingRecord>> {
    prop::collection::vec(record_strategy(), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (modo, tipo, area, titulo, day))| {
                let mut attrs = BTreeMap::new();
                attrs.insert("data-modo".to_string(), modo);
                attrs.insert("data-tipo".to_string(), tipo);
                attrs.insert("data-area".to_string(), area);
                attrs.insert("data-titulo".to_string(), titulo);
                if let Some(day) = day {
                    attrs.insert("data-date".to_string(), format!("2025-02-{day:02}"));
                }
                ListingRecord::from_attributes(format!("v{i}"), &attrs)
            })
            .collect()
    })
}

fn query_strategy() -> impl Strategy<Value = QueryState> {
    (
        prop::sample::select(vec!["todos", "remoto", "hibrido", "flex"]),
        prop::sample::select(vec!["todos", "efetivo", "banco"]),
        prop::sample::select(vec!["todas", "todos", "dados", ""]),
        "[a-zé ]{0,3}",
        prop::sample::select(SortKey::ALL.to_vec()),
    )
        .prop_map(|(modo, tipo, area, term, key)| {
            let mut query = QueryState::default();
            query.select_filter(FilterGroup::Modo, modo);
            query.select_filter(FilterGroup::Tipo, tipo);
            query.select_filter(FilterGroup::Area, area);
            query.set_search_term(&term);
            query.set_sort_key(key);
            query
        })
}

proptest! {
    #[test]
    fn filtered_records_all_match(records in catalog_strategy(), query in query_strategy()) {
        let filtered = filter_records(&records, &query);
        prop_assert!(filtered.windows(2).all(|w| w[0] < w[1]));
        for (idx, record) in records.iter().enumerate() {
            prop_assert_eq!(filtered.contains(&idx), matches(record, &query));
        }
    }

    #[test]
    fn sorting_is_stable_and_idempotent(records in catalog_strategy(), key in prop::sample::select(SortKey::ALL.to_vec())) {
        let mut once: Vec<usize> = (0..records.len()).collect();
        sort_indices(&records, &mut once, key);

        let mut twice = once.clone();
        sort_indices(&records, &mut twice, key);
        prop_assert_eq!(&once, &twice);

        for pair in once.windows(2) {
            let ordering = compare(&records[pair[0]], &records[pair[1]], key);
            prop_assert_ne!(ordering, Ordering::Greater);
            if ordering == Ordering::Equal {
                prop_assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn page_count_covers_every_record(total in 0usize..50, page in 1usize..10) {
        let items: Vec<usize> = (0..total).collect();
        let result = paginate(&items, page, DEFAULT_PAGE_SIZE);

        prop_assert_eq!(result.total_pages, (total + 5) / 6);
        prop_assert_eq!(result.controls_visible(), total > DEFAULT_PAGE_SIZE);
        prop_assert!(result.visible.len() <= DEFAULT_PAGE_SIZE);
        if page <= result.total_pages {
            prop_assert!(!result.visible.is_empty());
        }
    }

    #[test]
    fn query_changes_reset_paging(records in catalog_strategy(), term in "[a-z]{0,4}") {
        let mut state = AppState::new(records);
        while handle_event(&mut state, &Event::NextPage).unwrap().0 {}

        state.apply_search(&term);
        prop_assert_eq!(state.query.current_page, 1);

        while handle_event(&mut state, &Event::NextPage).unwrap().0 {}
        handle_event(
            &mut state,
            &Event::SelectFilter { group: FilterGroup::Modo, value: "todos".to_string() },
        )
        .unwrap();
        prop_assert_eq!(state.query.current_page, 1);
    }
}
