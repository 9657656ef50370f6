// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderMap};

use crate::common::i18n::DEFAULT_LANGUAGE;

// Idioma preferido do cliente (subtag primária, minúscula: "tr", "pt", "en")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Default for Locale {
    fn default() -> Self {
        Locale(DEFAULT_LANGUAGE.to_string())
    }
}

impl Locale {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(|header_str| {
                // "tr-TR,tr;q=0.9" -> ["tr-TR", "tr"] -> "tr"
                accept_language::parse(header_str)
                    .first()
                    .and_then(|tag| tag.split('-').next())
                    .filter(|primary| !primary.is_empty())
                    .map(str::to_ascii_lowercase)
            })
            .map(Locale)
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Locale::from_headers(&parts.headers))
    }
}
