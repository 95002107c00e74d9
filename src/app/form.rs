//! Application form controller.
//!
//! Values change on every keystroke, but errors are only recomputed on blur
//! and on submit. The phone field is reformatted on input regardless of
//! whether it currently validates.

use crate::domain::validation::{
    format_phone, is_valid_email, is_valid_linkedin, is_valid_nome, is_valid_telefone, EMAIL_ERROR,
    LINKEDIN_ERROR, NOME_ERROR, TELEFONE_ERROR,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logged in place of an omitted LinkedIn profile.
pub const LINKEDIN_NOT_PROVIDED: &str = "Não informado";

/// Prefix of every inline field error.
pub const ERROR_PREFIX: &str = "⚠ ";

/// Input fields of the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Nome,
    Email,
    Telefone,
    Linkedin,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Nome, Self::Email, Self::Telefone, Self::Linkedin];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nome => "nome",
            Self::Email => "email",
            Self::Telefone => "telefone",
            Self::Linkedin => "linkedin",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nome => "Nome completo",
            Self::Email => "E-mail",
            Self::Telefone => "Telefone",
            Self::Linkedin => "LinkedIn",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "nome" => Some(Self::Nome),
            "email" | "e-mail" => Some(Self::Email),
            "telefone" | "fone" => Some(Self::Telefone),
            "linkedin" => Some(Self::Linkedin),
            _ => None,
        }
    }

    /// LinkedIn is the only optional field.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Linkedin)
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Nome => is_valid_nome(value),
            Self::Email => is_valid_email(value),
            Self::Telefone => is_valid_telefone(value),
            Self::Linkedin => is_valid_linkedin(value),
        }
    }

    /// Inline message shown when the field fails its rule.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Nome => NOME_ERROR,
            Self::Email => EMAIL_ERROR,
            Self::Telefone => TELEFONE_ERROR,
            Self::Linkedin => LINKEDIN_ERROR,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value and inline error of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

impl FieldState {
    /// Mirrors `aria-invalid` on the input.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// The inline error element text, `⚠`-prefixed.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        self.error.map(|message| format!("{ERROR_PREFIX}{message}"))
    }
}

/// The application data handed to the runtime after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPayload {
    pub vaga: String,
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    nome: FieldState,
    email: FieldState,
    telefone: FieldState,
    linkedin: FieldState,
}

impl ApplicationForm {
    #[must_use]
    pub const fn field(&self, field: FormField) -> &FieldState {
        match field {
            FormField::Nome => &self.nome,
            FormField::Email => &self.email,
            FormField::Telefone => &self.telefone,
            FormField::Linkedin => &self.linkedin,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        match field {
            FormField::Nome => &mut self.nome,
            FormField::Email => &mut self.email,
            FormField::Telefone => &mut self.telefone,
            FormField::Linkedin => &mut self.linkedin,
        }
    }

    /// Stores a keystroke's worth of input. Does not touch errors.
    pub fn on_input(&mut self, field: FormField, value: &str) {
        let value = match field {
            FormField::Telefone => format_phone(value),
            _ => value.to_string(),
        };
        self.field_mut(field).value = value;
    }

    /// Re-checks one field when it loses focus.
    ///
    /// An empty field never shows an error on blur; emptiness of required
    /// fields is only reported on submit.
    pub fn on_blur(&mut self, field: FormField) {
        let state = self.field_mut(field);
        let value = state.value.trim();
        state.error = if !value.is_empty() && !field.accepts(value) {
            Some(field.error_message())
        } else {
            None
        };
    }

    /// Clears all values and errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clears prior errors and validates every field; returns whether all pass.
    ///
    /// LinkedIn is checked only when filled in.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in FormField::ALL {
            let state = self.field_mut(field);
            state.error = None;

            let value = state.value.trim();
            if !field.is_required() && value.is_empty() {
                continue;
            }
            if !field.accepts(value) {
                state.error = Some(field.error_message());
                all_valid = false;
            }
        }
        all_valid
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        FormField::ALL.iter().any(|f| self.field(*f).is_invalid())
    }

    /// Snapshot of the current values for the application log.
    #[must_use]
    pub fn payload(&self, vaga: &str) -> ApplicationPayload {
        let linkedin = self.linkedin.value.trim();
        ApplicationPayload {
            vaga: vaga.to_string(),
            nome: self.nome.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            telefone: self.telefone.value.clone(),
            linkedin: if linkedin.is_empty() {
                LINKEDIN_NOT_PROVIDED.to_string()
            } else {
                linkedin.to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ApplicationForm {
        let mut form = ApplicationForm::default();
        form.on_input(FormField::Nome, "Ana Silva");
        form.on_input(FormField::Email, "ana@empresa.com");
        form.on_input(FormField::Telefone, "11987654321");
        form
    }

    #[test]
    fn phone_is_formatted_on_input() {
        let mut form = ApplicationForm::default();
        form.on_input(FormField::Telefone, "1134567890");
        assert_eq!(form.field(FormField::Telefone).value, "(11) 3456-7890");
        assert!(!form.field(FormField::Telefone).is_invalid());
    }

    #[test]
    fn input_does_not_validate() {
        let mut form = ApplicationForm::default();
        form.on_input(FormField::Email, "nope");
        assert!(!form.has_errors());
    }

    #[test]
    fn blur_shows_and_clears_errors() {
        let mut form = ApplicationForm::default();
        form.on_input(FormField::Nome, "Ana");
        form.on_blur(FormField::Nome);
        assert_eq!(
            form.field(FormField::Nome).error_text().as_deref(),
            Some("⚠ Por favor, informe seu nome completo (nome e sobrenome)")
        );

        form.on_input(FormField::Nome, "Ana Silva");
        form.on_blur(FormField::Nome);
        assert!(!form.field(FormField::Nome).is_invalid());

        form.on_input(FormField::Nome, "Ana");
        form.on_blur(FormField::Nome);
        form.on_input(FormField::Nome, "");
        form.on_blur(FormField::Nome);
        assert!(!form.field(FormField::Nome).is_invalid());
    }

    #[test]
    fn submit_requires_all_required_fields() {
        let mut form = ApplicationForm::default();
        assert!(!form.validate_all());
        assert!(form.field(FormField::Nome).is_invalid());
        assert!(form.field(FormField::Email).is_invalid());
        assert!(form.field(FormField::Telefone).is_invalid());
        assert!(!form.field(FormField::Linkedin).is_invalid());
    }

    #[test]
    fn linkedin_checked_only_when_present() {
        let mut form = filled();
        assert!(form.validate_all());

        form.on_input(FormField::Linkedin, "linkedin.com/in/ana");
        assert!(!form.validate_all());
        assert_eq!(form.field(FormField::Linkedin).error, Some(LINKEDIN_ERROR));

        form.on_input(FormField::Linkedin, "https://linkedin.com/in/ana");
        assert!(form.validate_all());
        assert!(!form.has_errors());
    }

    #[test]
    fn payload_defaults_linkedin() {
        let form = filled();
        let payload = form.payload("Dev Rust");
        assert_eq!(payload.vaga, "Dev Rust");
        assert_eq!(payload.telefone, "(11) 98765-4321");
        assert_eq!(payload.linkedin, LINKEDIN_NOT_PROVIDED);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.on_input(FormField::Email, "x");
        form.validate_all();
        form.reset();
        assert_eq!(form, ApplicationForm::default());
    }
}
