//! Application form field rules and live phone formatting.
//!
//! Every function here is pure: the form controller decides *when* to run a
//! rule (blur, submit) and this module only answers *whether* a value passes.

use regex::Regex;
use std::sync::OnceLock;

/// Error shown for an incomplete full name.
pub const NOME_ERROR: &str = "Por favor, informe seu nome completo (nome e sobrenome)";
/// Error shown for a malformed e-mail address.
pub const EMAIL_ERROR: &str = "Por favor, informe um email válido";
/// Error shown for a phone number with the wrong digit count.
pub const TELEFONE_ERROR: &str = "Por favor, informe um telefone válido (10 ou 11 dígitos)";
/// Error shown for a LinkedIn value that is not an http(s) URL.
pub const LINKEDIN_ERROR: &str = "Por favor, informe uma URL válida (http:// ou https://)";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("built-in e-mail pattern should always compile")
    })
}

fn url_regex() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| {
        Regex::new(r"^(?i:https?)://[^\s/?#@]+(?:[/?#]\S*)?$")
            .expect("built-in URL pattern should always compile")
    })
}

/// Full name: at least two whitespace-separated words of two or more characters.
///
/// # Examples
///
/// ```
/// use vagas::domain::validation::is_valid_nome;
///
/// assert!(is_valid_nome("Ana Silva"));
/// assert!(!is_valid_nome("Ana"));
/// assert!(!is_valid_nome("Ana S"));
/// ```
#[must_use]
pub fn is_valid_nome(nome: &str) -> bool {
    let words: Vec<&str> = nome.split_whitespace().collect();
    words.len() >= 2 && words.iter().all(|word| word.chars().count() >= 2)
}

/// E-mail: one `@`, a dot in the domain part, no whitespace.
///
/// Surrounding whitespace is ignored; the form submits the trimmed value, so
/// a stray space from a paste does not block the application.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

/// Phone: 10 (landline) or 11 (mobile) digits once punctuation is stripped.
#[must_use]
pub fn is_valid_telefone(telefone: &str) -> bool {
    matches!(digits_of(telefone).len(), 10 | 11)
}

/// LinkedIn profile: an absolute `http` or `https` URL with a host.
#[must_use]
pub fn is_valid_linkedin(linkedin: &str) -> bool {
    url_regex().is_match(linkedin.trim())
}

/// Reformats a phone number as the user types.
///
/// Non-digits are discarded, the first two digits become the area code and a
/// hyphen is placed after the fourth (up to ten digits) or fifth (eleven or
/// more) digit of the local part. Partial input is formatted progressively.
///
/// # Examples
///
/// ```
/// use vagas::domain::validation::format_phone;
///
/// assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(format_phone("1134567890"), "(11) 3456-7890");
/// assert_eq!(format_phone("119"), "(11) 9");
/// ```
#[must_use]
pub fn format_phone(input: &str) -> String {
    let digits = digits_of(input);
    if digits.len() < 3 {
        return digits;
    }

    let (area, local) = digits.split_at(2);
    let split_at = if digits.len() <= 10 { 4 } else { 5 };

    if local.len() > split_at {
        let (first, last) = local.split_at(split_at);
        format!("({area}) {first}-{last}")
    } else {
        format!("({area}) {local}")
    }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
