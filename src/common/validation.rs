// src/common/validation.rs

use serde::Serialize;
use utoipa::ToSchema;
use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::{
    common::i18n::I18nStore,
    middleware::i18n::Locale,
    models::reservation::{Recurrence, RecurrenceEnd, RecurrencePattern},
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

// ---
// Regras customizadas usadas pelos `#[validate(custom(...))]`
// ---

/// Um único código por campo: ausente tem precedência sobre formato inválido.
pub fn email_field(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("email_required"));
    }
    if !value.validate_email() {
        return Err(ValidationError::new("email_invalid"));
    }
    Ok(())
}

pub fn password_field(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("password_required"));
    }
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new("password_too_short"));
    }
    Ok(())
}

pub fn recurrence(value: &Recurrence) -> Result<(), ValidationError> {
    if let RecurrencePattern::Weekly { days_of_week } = &value.pattern {
        if days_of_week.iter().any(|day| *day > 6) {
            return Err(ValidationError::new("days_of_week_range"));
        }
    }
    if let RecurrenceEnd::After { occurrences: 0 } = value.end {
        return Err(ValidationError::new("occurrences_min"));
    }
    Ok(())
}

// ---
// Achatamento dos erros para a resposta HTTP
// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Converte todos os erros em uma lista plana e traduzida, ordenada pelo
/// nome do campo (o `HashMap` do validator não tem ordem estável).
pub fn field_errors(errors: &ValidationErrors, locale: &Locale, i18n: &I18nStore) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = camel_case(&field);
            field_errors.iter().map(move |e| FieldError {
                field: field.clone(),
                message: i18n.translate(&locale.0, &e.code),
            })
        })
        .collect()
}

// `tax_number` -> `taxNumber`, para bater com o JSON do cliente
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
