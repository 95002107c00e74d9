//! Detail modal projection and the page scroll lock.

use crate::domain::{ListingRecord, Tipo};
use serde::Serialize;

/// Placeholder list item for a listing without requirements or benefits.
pub const CONTACT_PLACEHOLDER: &str = "Entre em contato para mais informações";
/// Shown when a listing has no title.
pub const TITLE_FALLBACK: &str = "Vaga não especificada";
/// Shown when a listing has no location.
pub const LOCATION_FALLBACK: &str = "Localização não especificada";
/// Shown when a listing has no description.
pub const DESCRIPTION_FALLBACK: &str = "Estamos buscando profissionais talentosos para integrar nosso time. \
Entre em contato conosco para mais informações sobre esta oportunidade.";

/// Reference-counted page scroll lock.
///
/// Every open overlay holds one reference; the page is scrollable again only
/// when the last holder releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: usize,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.holders += 1;
    }

    /// Releases one reference. Releasing an unheld lock is a no-op.
    pub fn release(&mut self) {
        self.holders = self.holders.saturating_sub(1);
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.holders > 0
    }

    #[must_use]
    pub const fn holders(&self) -> usize {
        self.holders
    }
}

/// What the detail modal displays for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    /// Contract type label, e.g. "Estágio".
    pub tag: String,
    pub titulo: String,
    pub localizacao: String,
    pub descricao: String,
    /// Never empty: falls back to [`CONTACT_PLACEHOLDER`].
    pub requisitos: Vec<String>,
    /// Never empty: falls back to [`CONTACT_PLACEHOLDER`].
    pub beneficios: Vec<String>,
}

impl DetailView {
    #[must_use]
    pub fn from_record(record: &ListingRecord) -> Self {
        Self {
            id: record.id.clone(),
            tag: detail_tag(&record.tipo).to_string(),
            titulo: or_fallback(&record.titulo, TITLE_FALLBACK),
            localizacao: or_fallback(&record.localizacao, LOCATION_FALLBACK),
            descricao: or_fallback(&record.descricao, DESCRIPTION_FALLBACK),
            requisitos: list_or_placeholder(&record.requisitos),
            beneficios: list_or_placeholder(&record.beneficios),
        }
    }
}

/// A card without a contract type is presented as a regular position.
///
/// Only the tag changes; the `tipo` sort still ranks such records last.
fn detail_tag(tipo: &Tipo) -> &'static str {
    match tipo {
        Tipo::Other(code) if code.trim().is_empty() => Tipo::Efetivo.label(),
        tipo => tipo.label(),
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn list_or_placeholder(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        vec![CONTACT_PLACEHOLDER.to_string()]
    } else {
        items.to_vec()
    }
}
