// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
};

/// Extrai o token de um cabeçalho exatamente no formato `Bearer <token>`.
/// Qualquer outra forma é recusada antes de tentar decodificar o JWT.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

// O middleware em si: sem token válido o handler nunca roda
pub async fn auth_guard(
    State(app_state): State<AppState>,
    locale: Locale,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let partner_id = bearer_token(request.headers())
        .ok_or(AppError::InvalidToken)
        .and_then(|token| app_state.token_service.verify(token))
        .map_err(|e| {
            tracing::debug!("Requisição sem autenticação válida: {}", e);
            e.to_api_error(&locale, &app_state.i18n_store)
        })?;

    // Insere o parceiro nos "extensions" da requisição
    request.extensions_mut().insert(AuthenticatedPartner(partner_id));
    Ok(next.run(request).await)
}

// Extrator para obter o parceiro autenticado diretamente nos handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedPartner(pub Uuid);

impl<S> FromRequestParts<S> for AuthenticatedPartner
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(partner) = parts.extensions.get::<AuthenticatedPartner>() {
            return Ok(*partner);
        }

        // Rota montada sem o auth_guard
        let app_state = AppState::from_ref(state);
        let locale = Locale::from_headers(&parts.headers);
        Err(AppError::InvalidToken.to_api_error(&locale, &app_state.i18n_store))
    }
}
