//! Result ordering.
//!
//! Every comparator is total and every sort is stable, so records that compare
//! equal keep their relative order from the previous arrangement.

use crate::domain::ListingRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordering selected in the sort control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Newest posting date first.
    #[default]
    Recente,
    /// Oldest posting date first.
    Antiga,
    /// Title, accent- and case-insensitive.
    Alfabetica,
    /// Contract type: efetivo, estagio, banco, then anything else. Ties by title.
    Tipo,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Recente, Self::Antiga, Self::Alfabetica, Self::Tipo];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recente => "recente",
            Self::Antiga => "antiga",
            Self::Alfabetica => "alfabetica",
            Self::Tipo => "tipo",
        }
    }

    /// Label shown next to the option in the sort control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recente => "Mais recentes",
            Self::Antiga => "Mais antigas",
            Self::Alfabetica => "A-Z",
            Self::Tipo => "Tipo de vaga",
        }
    }

    /// Parses a sort control value. Unknown values yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "recente" => Some(Self::Recente),
            "antiga" => Some(Self::Antiga),
            "alfabetica" | "alfabética" | "a-z" => Some(Self::Alfabetica),
            "tipo" => Some(Self::Tipo),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares two records under `key`.
#[must_use]
pub fn compare(a: &ListingRecord, b: &ListingRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Recente => b.sort_date().cmp(&a.sort_date()),
        SortKey::Antiga => a.sort_date().cmp(&b.sort_date()),
        SortKey::Alfabetica => compare_titles(&a.titulo, &b.titulo),
        SortKey::Tipo => a
            .tipo
            .rank()
            .cmp(&b.tipo.rank())
            .then_with(|| compare_titles(&a.titulo, &b.titulo)),
    }
}

/// Stable in-place sort of `indices`, each pointing into `records`.
pub fn sort_indices(records: &[ListingRecord], indices: &mut [usize], key: SortKey) {
    indices.sort_by(|&i, &j| compare(&records[i], &records[j], key));
}

/// Natural-language title comparison.
///
/// Base letters decide first, ignoring accents and case. Remaining ties are
/// broken by accents, then by case with lowercase first.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Modo, Tipo};
    use chrono::NaiveDate;

    fn record(id: &str, titulo: &str, tipo: Tipo, date: Option<(i32, u32, u32)>) -> ListingRecord {
        ListingRecord {
            id: id.to_string(),
            modo: Modo::Remoto,
            tipo,
            area: String::new(),
            titulo: titulo.to_string(),
            descricao: String::new(),
            localizacao: String::new(),
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            requisitos: vec![],
            beneficios: vec![],
        }
    }

    fn ordered_ids(records: &[ListingRecord], key: SortKey) -> Vec<String> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        sort_indices(records, &mut indices, key);
        indices.into_iter().map(|i| records[i].id.clone()).collect()
    }

    #[test]
    fn recency_with_sentinel_for_missing_dates() {
        let records = vec![
            record("a", "", Tipo::Efetivo, Some((2025, 3, 1))),
            record("b", "", Tipo::Efetivo, None),
            record("c", "", Tipo::Efetivo, Some((2024, 12, 31))),
            record("d", "", Tipo::Efetivo, Some((2025, 1, 1))),
        ];
        assert_eq!(ordered_ids(&records, SortKey::Recente), ["a", "b", "d", "c"]);
        assert_eq!(ordered_ids(&records, SortKey::Antiga), ["c", "b", "d", "a"]);
    }

    #[test]
    fn tipo_ranking_puts_unknown_last() {
        let records = vec![
            record("x", "", Tipo::Other("pj".into()), None),
            record("b", "", Tipo::Banco, None),
            record("s", "", Tipo::Estagio, None),
            record("e", "", Tipo::Efetivo, None),
            record("e2", "", Tipo::Efetivo, None),
        ];
        assert_eq!(ordered_ids(&records, SortKey::Tipo), ["e", "e2", "s", "b", "x"]);
    }

    #[test]
    fn titles_ignore_accents_and_case() {
        assert_eq!(compare_titles("Ágil", "afinal"), Ordering::Greater);
        assert_eq!(compare_titles("Ágil", "analista"), Ordering::Less);
        assert_eq!(compare_titles("ágil", "Banco"), Ordering::Less);
        assert_eq!(compare_titles("Estágio", "Estagio"), Ordering::Greater);
        assert_eq!(compare_titles("a", "A"), Ordering::Less);
        assert_eq!(compare_titles("Dev", "Dev"), Ordering::Equal);
    }

    #[test]
    fn alphabetical_sort() {
        let records = vec![
            record("3", "Designer", Tipo::Efetivo, None),
            record("1", "Ágil Coach", Tipo::Efetivo, None),
            record("2", "Banco de Talentos", Tipo::Efetivo, None),
        ];
        assert_eq!(ordered_ids(&records, SortKey::Alfabetica), ["1", "2", "3"]);
    }

    #[test]
    fn equal_keys_keep_previous_order() {
        let records = vec![
            record("first", "", Tipo::Estagio, Some((2025, 2, 2))),
            record("second", "", Tipo::Estagio, Some((2025, 2, 2))),
            record("third", "", Tipo::Estagio, Some((2025, 2, 2))),
        ];
        for key in SortKey::ALL {
            assert_eq!(ordered_ids(&records, key), ["first", "second", "third"]);
        }
    }

    #[test]
    fn sort_codes() {
        assert_eq!(SortKey::from_code("Recente"), Some(SortKey::Recente));
        assert_eq!(SortKey::from_code("alfabética"), Some(SortKey::Alfabetica));
        assert_eq!(SortKey::from_code("salario"), None);
        assert_eq!(SortKey::default(), SortKey::Recente);
    }
}
