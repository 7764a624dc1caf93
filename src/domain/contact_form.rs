//! Field state and validation rules for the lead contact form.

use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;
use thiserror::Error;

use super::practice_area::PracticeArea;

const NAME_MIN_CHARS: usize = 3;
const PHONE_MIN_DIGITS: usize = 10;
const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Area,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Area,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome Completo",
            Self::Phone => "Telefone",
            Self::Email => "Email",
            Self::Area => "Área de Interesse",
            Self::Message => "Mensagem",
        }
    }
}

/// A single failed rule; `Display` is the inline message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Nome completo é obrigatório.")]
    NameRequired,
    #[error("Nome deve ter pelo menos 3 caracteres.")]
    NameTooShort,
    #[error("Telefone é obrigatório.")]
    PhoneRequired,
    #[error("Telefone inválido. Inclua o DDD.")]
    PhoneMissingAreaCode,
    #[error("Email é obrigatório.")]
    EmailRequired,
    #[error("Formato de email inválido.")]
    EmailInvalidFormat,
    #[error("Por favor, selecione uma área de interesse.")]
    AreaNotSelected,
    #[error("Mensagem é obrigatória.")]
    MessageRequired,
    #[error("A mensagem deve ter pelo menos 10 caracteres.")]
    MessageTooShort,
}

pub type FieldErrors = BTreeMap<FormField, FieldError>;

/// Result of validating every field once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValidation {
    pub errors: FieldErrors,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    name: String,
    phone: String,
    email: String,
    area: String,
    message: String,
    errors: FieldErrors,
}

impl ContactFormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Area => &self.area,
            FormField::Message => &self.message,
        }
    }

    pub fn error(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Stores the new value and drops that field's error, if any.
    /// Other fields keep whatever error they had.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
        self.errors.remove(&field);
    }

    /// Runs every rule independently and replaces the stored error map.
    pub fn validate(&mut self) -> FormValidation {
        let errors: FieldErrors = FormField::ALL
            .into_iter()
            .filter_map(|field| check_field(field, self.value(field)).map(|err| (field, err)))
            .collect();

        self.errors = errors.clone();
        FormValidation { errors }
    }

    /// Returns true when no field has a value or an error.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && FormField::ALL.iter().all(|f| self.value(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Area => &mut self.area,
            FormField::Message => &mut self.message,
        }
    }
}

/// Applies one field's rule to a raw value.
pub fn check_field(field: FormField, value: &str) -> Option<FieldError> {
    match field {
        FormField::Name => check_name(value),
        FormField::Phone => check_phone(value),
        FormField::Email => check_email(value),
        FormField::Area => check_area(value),
        FormField::Message => check_message(value),
    }
}

fn check_name(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(FieldError::NameRequired)
    } else if trimmed.chars().count() < NAME_MIN_CHARS {
        Some(FieldError::NameTooShort)
    } else {
        None
    }
}

fn check_phone(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::PhoneRequired);
    }

    let digits = value.chars().filter(char::is_ascii_digit).count();
    (digits < PHONE_MIN_DIGITS).then_some(FieldError::PhoneMissingAreaCode)
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::EmailRequired)
    } else if !email_pattern().is_match(value) {
        Some(FieldError::EmailInvalidFormat)
    } else {
        None
    }
}

fn check_area(value: &str) -> Option<FieldError> {
    PracticeArea::from_label(value)
        .is_none()
        .then_some(FieldError::AreaNotSelected)
}

fn check_message(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(FieldError::MessageRequired)
    } else if trimmed.chars().count() < MESSAGE_MIN_CHARS {
        Some(FieldError::MessageTooShort)
    } else {
        None
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.update_field(FormField::Name, "João Silva");
        state.update_field(FormField::Phone, "(11) 98888-7777");
        state.update_field(FormField::Email, "a@b.com");
        state.update_field(FormField::Area, "Direito Civil");
        state.update_field(FormField::Message, "Preciso de ajuda com um contrato.");
        state
    }

    #[test]
    fn name_rule() {
        assert_eq!(check_field(FormField::Name, ""), Some(FieldError::NameRequired));
        assert_eq!(check_field(FormField::Name, "   "), Some(FieldError::NameRequired));
        assert_eq!(check_field(FormField::Name, "Jo"), Some(FieldError::NameTooShort));
        assert_eq!(check_field(FormField::Name, "  Jo  "), Some(FieldError::NameTooShort));
        assert_eq!(check_field(FormField::Name, "João Silva"), None);
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert_eq!(check_field(FormField::Name, "Zé"), Some(FieldError::NameTooShort));
        assert_eq!(check_field(FormField::Name, "Joé"), None);
    }

    #[test]
    fn phone_rule() {
        assert_eq!(check_field(FormField::Phone, ""), Some(FieldError::PhoneRequired));
        assert_eq!(
            check_field(FormField::Phone, "1234"),
            Some(FieldError::PhoneMissingAreaCode)
        );
        assert_eq!(
            check_field(FormField::Phone, "98888-7777"),
            Some(FieldError::PhoneMissingAreaCode)
        );
        assert_eq!(check_field(FormField::Phone, "(11) 98888-7777"), None);
        assert_eq!(check_field(FormField::Phone, "1130000000"), None);
    }

    #[test]
    fn email_rule() {
        assert_eq!(check_field(FormField::Email, ""), Some(FieldError::EmailRequired));
        assert_eq!(
            check_field(FormField::Email, "x"),
            Some(FieldError::EmailInvalidFormat)
        );
        assert_eq!(
            check_field(FormField::Email, "a@b"),
            Some(FieldError::EmailInvalidFormat)
        );
        assert_eq!(
            check_field(FormField::Email, "a b@c.com"),
            Some(FieldError::EmailInvalidFormat)
        );
        assert_eq!(
            check_field(FormField::Email, "a@@b.com"),
            Some(FieldError::EmailInvalidFormat)
        );
        assert_eq!(check_field(FormField::Email, "a@b.com"), None);
    }

    #[test]
    fn area_rule() {
        assert_eq!(check_field(FormField::Area, ""), Some(FieldError::AreaNotSelected));
        assert_eq!(
            check_field(FormField::Area, "Selecione uma área"),
            Some(FieldError::AreaNotSelected)
        );
        assert_eq!(check_field(FormField::Area, "Direito Civil"), None);
    }

    #[test]
    fn message_rule() {
        assert_eq!(
            check_field(FormField::Message, " "),
            Some(FieldError::MessageRequired)
        );
        assert_eq!(
            check_field(FormField::Message, "hi"),
            Some(FieldError::MessageTooShort)
        );
        assert_eq!(
            check_field(FormField::Message, "Preciso de ajuda com um contrato."),
            None
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut state = ContactFormState::default();

        let validation = state.validate();

        assert!(!validation.is_valid());
        assert_eq!(validation.errors.len(), 5);
        assert_eq!(state.errors(), &validation.errors);
    }

    #[test]
    fn filled_form_is_valid() {
        let mut state = filled();

        let validation = state.validate();

        assert!(validation.is_valid());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = ContactFormState::default();
        state.validate();

        state.update_field(FormField::Email, "still wrong");

        assert_eq!(state.error(FormField::Email), None);
        assert_eq!(state.error(FormField::Name), Some(FieldError::NameRequired));
        assert_eq!(state.error(FormField::Phone), Some(FieldError::PhoneRequired));
        assert_eq!(state.error(FormField::Area), Some(FieldError::AreaNotSelected));
        assert_eq!(
            state.error(FormField::Message),
            Some(FieldError::MessageRequired)
        );
    }

    #[test]
    fn revalidation_replaces_previous_errors() {
        let mut state = filled();
        state.update_field(FormField::Name, "Jo");
        state.validate();
        assert_eq!(state.error(FormField::Name), Some(FieldError::NameTooShort));

        state.update_field(FormField::Name, "João");
        let validation = state.validate();

        assert!(validation.is_valid());
    }

    #[test]
    fn field_error_display_is_user_message() {
        assert_eq!(
            FieldError::PhoneMissingAreaCode.to_string(),
            "Telefone inválido. Inclua o DDD."
        );
    }

    #[test]
    fn clear_resets_values_and_errors() {
        let mut state = filled();
        state.update_field(FormField::Name, "");
        state.validate();

        state.clear();

        assert!(state.is_empty());
    }
}
