// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::ApiError, extract::AppJson},
    config::AppState,
    middleware::i18n::Locale,
    models::partner::{LoginPartnerPayload, LoginResponse, RegisterPartnerPayload, RegisterResponse},
};

// POST /api/partners/register
#[utoipa::path(
    post,
    path = "/api/partners/register",
    tag = "Partners",
    request_body = RegisterPartnerPayload,
    responses(
        (status = 201, description = "Parceiro registrado", body = RegisterResponse),
        (status = 400, description = "Campos ausentes ou inválidos"),
        (status = 409, description = "E-mail ou número fiscal já em uso")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<RegisterPartnerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let partner = app_state
        .partner_service
        .register(payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let message = app_state.i18n_store.translate(&locale.0, "partner_registered");
    Ok((StatusCode::CREATED, Json(RegisterResponse { message, partner })))
}

// POST /api/partners/login
#[utoipa::path(
    post,
    path = "/api/partners/login",
    tag = "Partners",
    request_body = LoginPartnerPayload,
    responses(
        (status = 200, description = "Login realizado", body = LoginResponse),
        (status = 400, description = "Formato inválido"),
        (status = 401, description = "E-mail ou senha inválidos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    AppJson(payload): AppJson<LoginPartnerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let to_api = |app_err: crate::common::error::AppError| {
        app_err.to_api_error(&locale, &app_state.i18n_store)
    };

    let partner = app_state.partner_service.authenticate(payload).await.map_err(to_api)?;

    // A emissão do token fica por cima da autenticação, não dentro dela
    let issued = app_state.token_service.issue(partner.id).map_err(to_api)?;

    Ok(Json(LoginResponse {
        message: app_state.i18n_store.translate(&locale.0, "login_successful"),
        token: Some(issued.token),
        expires_at: Some(issued.expires_at),
        partner,
    }))
}
