//! Record inclusion rules.
//!
//! A record is part of the result when it passes every rule: the `modo`,
//! `tipo` and `area` group filters and the free-text search. There is no
//! scoring, only a boolean AND of independent predicates.

use super::state::{FilterGroup, QueryState};
use crate::domain::ListingRecord;

/// Returns whether `record` passes every active filter and the search term.
///
/// `query.search_term` is expected to be normalized already (see
/// [`QueryState::set_search_term`]).
#[must_use]
pub fn matches(record: &ListingRecord, query: &QueryState) -> bool {
    group_passes(query, FilterGroup::Modo, record.modo.as_str())
        && group_passes(query, FilterGroup::Tipo, record.tipo.as_str())
        && group_passes(query, FilterGroup::Area, &record.area)
        && search_passes(record, &query.search_term)
}

/// Indices of the records in `records` that pass [`matches`], in input order.
#[must_use]
pub fn filter_records(records: &[ListingRecord], query: &QueryState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, query))
        .map(|(idx, _)| idx)
        .collect()
}

fn group_passes(query: &QueryState, group: FilterGroup, value: &str) -> bool {
    query
        .filters
        .get(group)
        .map_or(true, |active| group.is_wildcard(active) || active == value)
}

fn search_passes(record: &ListingRecord, term: &str) -> bool {
    term.is_empty()
        || record.titulo.to_lowercase().contains(term)
        || record.descricao.to_lowercase().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Modo, Tipo};

    fn record(modo: Modo, tipo: Tipo, area: &str, titulo: &str, descricao: &str) -> ListingRecord {
        ListingRecord {
            id: titulo.to_string(),
            modo,
            tipo,
            area: area.to_string(),
            titulo: titulo.to_string(),
            descricao: descricao.to_string(),
            localizacao: String::new(),
            date: None,
            requisitos: vec![],
            beneficios: vec![],
        }
    }

    #[test]
    fn untouched_groups_pass_everything() {
        let query = QueryState::default();
        let r = record(Modo::Other(String::new()), Tipo::Other(String::new()), "", "", "");
        assert!(matches(&r, &query));
    }

    #[test]
    fn exact_group_values() {
        let r = record(Modo::Remoto, Tipo::Efetivo, "tecnologia", "Dev", "");
        let mut query = QueryState::default();

        query.select_filter(FilterGroup::Modo, "remoto");
        assert!(matches(&r, &query));
        query.select_filter(FilterGroup::Modo, "presencial");
        assert!(!matches(&r, &query));
        query.select_filter(FilterGroup::Modo, "todos");
        assert!(matches(&r, &query));

        query.select_filter(FilterGroup::Area, "todas");
        assert!(matches(&r, &query));
        query.select_filter(FilterGroup::Area, "saude");
        assert!(!matches(&r, &query));
    }

    #[test]
    fn todas_is_not_a_wildcard_for_modo() {
        let r = record(Modo::Remoto, Tipo::Efetivo, "ti", "Dev", "");
        let mut query = QueryState::default();
        query.select_filter(FilterGroup::Modo, "todas");
        assert!(!matches(&r, &query));
    }

    #[test]
    fn search_hits_title_or_description() {
        let by_desc = record(
            Modo::Remoto,
            Tipo::Efetivo,
            "ti",
            "Analista de Dados",
            "Trabalho no BANCO de dados",
        );
        let by_title = record(Modo::Remoto, Tipo::Banco, "ti", "Banco de Talentos", "");
        let miss = record(Modo::Remoto, Tipo::Efetivo, "ti", "Designer", "Figma");

        let mut query = QueryState::default();
        query.set_search_term("Banco");

        let records = vec![by_desc, miss, by_title];
        assert_eq!(filter_records(&records, &query), vec![0, 2]);
    }

    #[test]
    fn all_predicates_are_anded() {
        let r = record(Modo::Hibrido, Tipo::Estagio, "rh", "Estágio em RH", "");
        let mut query = QueryState::default();
        query.select_filter(FilterGroup::Modo, "hibrido");
        query.select_filter(FilterGroup::Tipo, "estagio");
        query.select_filter(FilterGroup::Area, "rh");
        query.set_search_term("estágio");
        assert!(matches(&r, &query));

        query.set_search_term("engenheiro");
        assert!(!matches(&r, &query));
    }
}
