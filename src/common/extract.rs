// src/common/extract.rs

use axum::{
    extract::{FromRef, FromRequest, FromRequestParts, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
};

/// `Json<T>` com rejeição no nosso formato: qualquer corpo malformado
/// (JSON inválido, tipo errado, content-type ausente) vira 400 traduzido.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let locale = Locale::from_request_parts(&mut parts, state)
            .await
            .unwrap_or_else(|never| match never {});
        let req = Request::from_parts(parts, body);

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::debug!("Corpo rejeitado: {}", rejection.body_text());
                let app_state = AppState::from_ref(state);
                Err(AppError::InvalidRequestBody.to_api_error(&locale, &app_state.i18n_store))
            }
        }
    }
}
