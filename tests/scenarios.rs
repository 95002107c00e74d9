//! End-to-end behavior driven through `handle_event`.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use vagas::app::{FormField, ModalState};
use vagas::domain::validation::NOME_ERROR;
use vagas::query::{FilterGroup, SortKey};
use vagas::ui::ModalView;
use vagas::{handle_event, Action, AppState, Event, ListingRecord};

fn listing(id: &str, pairs: &[(&str, &str)]) -> ListingRecord {
    let attrs: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    ListingRecord::from_attributes(id, &attrs)
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state
        .compute_viewmodel()
        .display_items
        .into_iter()
        .map(|item| item.id)
        .collect()
}

fn efetivo_catalog(n: usize) -> Vec<ListingRecord> {
    (1..=n)
        .map(|i| {
            let titulo = format!("Vaga {i}");
            let date = format!("2025-03-{:02}", 20 - i);
            listing(
                &format!("v{i}"),
                &[
                    ("data-tipo", "efetivo"),
                    ("data-titulo", titulo.as_str()),
                    ("data-date", date.as_str()),
                ],
            )
        })
        .collect()
}

fn open_form(state: &mut AppState, id: &str) {
    send(state, Event::OpenDetail { id: id.to_string() });
    send(state, Event::Apply);
}

fn fill(state: &mut AppState, values: &[(FormField, &str)]) {
    for (field, value) in values {
        send(
            state,
            Event::FieldInput {
                field: *field,
                value: (*value).to_string(),
            },
        );
    }
}

#[test]
fn eight_listings_span_two_pages() {
    let mut state = AppState::new(efetivo_catalog(8));
    send(
        &mut state,
        Event::SelectFilter {
            group: FilterGroup::Tipo,
            value: "efetivo".to_string(),
        },
    );

    let vm = state.compute_viewmodel();
    assert_eq!(vm.header.result_count, 8);
    assert_eq!(vm.pagination.total_pages, 2);
    assert!(vm.pagination.visible);
    assert!(vm.pagination.next_enabled);
    assert!(!vm.pagination.prev_enabled);
    assert_eq!(visible_ids(&state), ["v1", "v2", "v3", "v4", "v5", "v6"]);

    let (render, actions) = send(&mut state, Event::NextPage);
    assert!(render);
    assert_eq!(actions, vec![Action::ScrollToList]);
    assert_eq!(visible_ids(&state), ["v7", "v8"]);

    let (render, actions) = send(&mut state, Event::NextPage);
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn paging_keeps_filters_and_sort() {
    let mut state = AppState::new(efetivo_catalog(8));
    send(&mut state, Event::SetSort(SortKey::Antiga));
    send(&mut state, Event::NextPage);

    assert_eq!(state.query.sort_key, SortKey::Antiga);
    assert_eq!(state.query.current_page, 2);
    assert_eq!(visible_ids(&state), ["v2", "v1"]);
}

#[test]
fn filter_change_returns_to_first_page() {
    let mut state = AppState::new(efetivo_catalog(8));
    send(&mut state, Event::NextPage);
    send(
        &mut state,
        Event::SelectFilter {
            group: FilterGroup::Area,
            value: "todas".to_string(),
        },
    );
    assert_eq!(state.query.current_page, 1);
}

#[test]
fn search_matches_description_after_debounce() {
    let records = vec![
        listing(
            "dados",
            &[
                ("data-titulo", "Analista"),
                ("data-descricao", "Modelagem de banco de dados"),
            ],
        ),
        listing("rh", &[("data-titulo", "Recrutador")]),
    ];
    let mut state = AppState::new(records);
    let start = Instant::now();

    send(
        &mut state,
        Event::SearchInput {
            text: "ban".to_string(),
            at: start,
        },
    );
    send(
        &mut state,
        Event::SearchInput {
            text: "BANCO".to_string(),
            at: start + Duration::from_millis(100),
        },
    );
    assert_eq!(state.compute_viewmodel().header.result_count, 2);

    let (render, _) = send(&mut state, Event::Tick(start + Duration::from_millis(350)));
    assert!(!render);

    let (render, _) = send(&mut state, Event::Tick(start + Duration::from_millis(400)));
    assert!(render);
    assert_eq!(state.query.search_term, "banco");
    assert_eq!(visible_ids(&state), ["dados"]);
}

#[test]
fn phone_is_formatted_while_typing() {
    let mut state = AppState::new(efetivo_catalog(1));
    open_form(&mut state, "v1");

    fill(&mut state, &[(FormField::Telefone, "11987654321")]);
    assert_eq!(state.form.field(FormField::Telefone).value, "(11) 98765-4321");

    fill(&mut state, &[(FormField::Telefone, "1134567890")]);
    assert_eq!(state.form.field(FormField::Telefone).value, "(11) 3456-7890");
}

#[test]
fn single_name_blocks_submission() {
    let mut state = AppState::new(efetivo_catalog(1));
    open_form(&mut state, "v1");
    fill(
        &mut state,
        &[
            (FormField::Nome, "Ana"),
            (FormField::Email, "ana@exemplo.com"),
            (FormField::Telefone, "11987654321"),
        ],
    );

    let (_, actions) = send(&mut state, Event::Submit { at: Instant::now() });
    assert!(actions.is_empty());
    assert!(!state.notification_visible());
    assert_eq!(state.form.field(FormField::Nome).error, Some(NOME_ERROR));

    let Some(ModalView::Application(view)) = state.compute_viewmodel().modal else {
        panic!("application form should stay open");
    };
    let nome = view.fields.iter().find(|f| f.field == FormField::Nome).unwrap();
    assert!(nome.invalid);
    assert!(nome.error.as_deref().unwrap().starts_with("⚠ "));
}

#[test]
fn valid_application_is_submitted_and_banner_expires() {
    let mut state = AppState::new(vec![listing("v1", &[("data-titulo", "Designer")])]);
    open_form(&mut state, "v1");
    fill(
        &mut state,
        &[
            (FormField::Nome, "Ana Silva"),
            (FormField::Email, "ana@exemplo.com"),
            (FormField::Telefone, "1134567890"),
        ],
    );

    let submitted_at = Instant::now();
    let (_, actions) = send(&mut state, Event::Submit { at: submitted_at });
    let [Action::SubmitApplication(payload)] = actions.as_slice() else {
        panic!("expected one submission, got {actions:?}");
    };
    assert_eq!(payload.vaga, "Designer");
    assert_eq!(payload.nome, "Ana Silva");
    assert_eq!(payload.telefone, "(11) 3456-7890");
    assert_eq!(payload.linkedin, "Não informado");

    assert_eq!(state.modal, ModalState::Closed);
    assert!(!state.scroll_lock.is_locked());
    assert!(state.compute_viewmodel().notification.is_some());

    send(&mut state, Event::Tick(submitted_at + Duration::from_millis(3999)));
    assert!(state.notification_visible());
    let (render, _) = send(&mut state, Event::Tick(submitted_at + Duration::from_millis(4000)));
    assert!(render);
    assert!(state.compute_viewmodel().notification.is_none());
}

#[test]
fn tipo_sort_ranks_then_orders_titles() {
    let records = vec![
        listing("z", &[("data-tipo", "banco"), ("data-titulo", "Z")]),
        listing("b", &[("data-tipo", "efetivo"), ("data-titulo", "B")]),
        listing("a", &[("data-tipo", "efetivo"), ("data-titulo", "A")]),
    ];
    let mut state = AppState::new(records);
    send(&mut state, Event::SetSort(SortKey::Tipo));
    assert_eq!(visible_ids(&state), ["a", "b", "z"]);
}

#[test]
fn switching_overlays_keeps_one_lock() {
    let mut state = AppState::new(efetivo_catalog(2));

    send(&mut state, Event::OpenDetail { id: "v1".to_string() });
    assert_eq!(state.scroll_lock.holders(), 1);

    send(&mut state, Event::Apply);
    assert!(matches!(state.modal, ModalState::Application { .. }));
    assert_eq!(state.scroll_lock.holders(), 1);

    let (render, _) = send(&mut state, Event::CloseModal);
    assert!(render);
    assert_eq!(state.scroll_lock.holders(), 0);
    assert!(!state.compute_viewmodel().scroll_locked);
}

#[test]
fn content_clicks_and_idle_escape_do_nothing() {
    let mut state = AppState::new(efetivo_catalog(1));

    assert_eq!(send(&mut state, Event::Escape), (false, vec![]));

    send(&mut state, Event::OpenDetail { id: "v1".to_string() });
    let (render, _) = send(&mut state, Event::OverlayClick { on_backdrop: false });
    assert!(!render);
    assert!(state.modal.is_open());

    let (render, _) = send(&mut state, Event::OverlayClick { on_backdrop: true });
    assert!(render);
    assert!(!state.modal.is_open());
}

#[test]
fn unknown_listing_is_ignored() {
    let mut state = AppState::new(efetivo_catalog(1));
    assert_eq!(
        send(&mut state, Event::OpenDetail { id: "nope".to_string() }),
        (false, vec![])
    );
    assert_eq!(state.scroll_lock.holders(), 0);
}

#[test]
fn reopening_the_form_clears_it() {
    let mut state = AppState::new(efetivo_catalog(1));
    open_form(&mut state, "v1");
    fill(&mut state, &[(FormField::Email, "nao-e-email")]);
    send(&mut state, Event::FieldBlur(FormField::Email));
    assert!(state.form.field(FormField::Email).is_invalid());

    send(&mut state, Event::Escape);
    open_form(&mut state, "v1");
    assert_eq!(state.form.field(FormField::Email).value, "");
    assert!(!state.form.has_errors());
}

#[test]
fn quit_requests_shutdown() {
    let mut state = AppState::new(vec![]);
    assert_eq!(send(&mut state, Event::Quit), (false, vec![Action::Quit]));
}

#[test]
fn quit_applies_search_still_in_debounce() {
    let records = vec![
        listing("dev", &[("data-titulo", "Desenvolvedor Back-end")]),
        listing("rh", &[("data-titulo", "Recrutador")]),
    ];
    let mut state = AppState::new(records);
    send(
        &mut state,
        Event::SearchInput {
            text: "dev".to_string(),
            at: Instant::now(),
        },
    );

    let (render, actions) = send(&mut state, Event::Quit);
    assert!(render);
    assert_eq!(actions, vec![Action::Quit]);
    assert_eq!(state.query.search_term, "dev");
    assert_eq!(visible_ids(&state), ["dev"]);
    assert!(!state.search_pending());
}

#[test]
fn detail_of_card_without_tipo_is_tagged_efetivo() {
    let mut state = AppState::new(vec![
        listing("sem-tipo", &[("data-titulo", "Vaga Geral")]),
        listing("banco", &[("data-tipo", "banco"), ("data-titulo", "Banco")]),
    ]);
    send(&mut state, Event::OpenDetail { id: "sem-tipo".to_string() });

    let Some(ModalView::Detail(view)) = state.compute_viewmodel().modal else {
        panic!("detail overlay should be open");
    };
    assert_eq!(view.tag, "Efetivo");

    send(&mut state, Event::SetSort(SortKey::Tipo));
    assert_eq!(visible_ids(&state), ["banco", "sem-tipo"]);
}
