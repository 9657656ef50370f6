use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{
    common::{
        i18n::I18nStore,
        validation::{field_errors, FieldError},
    },
    middleware::i18n::Locale,
};

// Erro interno da aplicação. Só vira resposta HTTP via `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Corpo da requisição inválido")]
    InvalidRequestBody,

    #[error("Data de início inválida")]
    InvalidStartDate,

    #[error("Data de fim inválida")]
    InvalidEndDate,

    #[error("ID de reserva inválido")]
    InvalidReservationId,

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Número fiscal já existe")]
    TaxNumberAlreadyExists,

    // E-mail desconhecido e senha errada caem aqui, sem distinção
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    // Ausente, malformado, expirado ou com algoritmo errado: sempre o mesmo
    #[error("Token inválido")]
    InvalidToken,

    // Inexistente ou de outro parceiro: sempre o mesmo
    #[error("Reserva não encontrada")]
    ReservationNotFound,

    #[error("Tempo limite do armazenamento excedido")]
    StorageTimeout,

    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// Traduz o erro para o idioma do cliente e escolhe o status HTTP.
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let (status, key) = match self {
            AppError::ValidationError(errors) => {
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    message: i18n.translate(&locale.0, "validation_failed"),
                    details: Some(field_errors(errors, locale, i18n)),
                };
            }
            AppError::InvalidRequestBody => (StatusCode::BAD_REQUEST, "invalid_request_body"),
            AppError::InvalidStartDate => (StatusCode::BAD_REQUEST, "invalid_start_date"),
            AppError::InvalidEndDate => (StatusCode::BAD_REQUEST, "invalid_end_date"),
            AppError::InvalidReservationId => (StatusCode::BAD_REQUEST, "invalid_reservation_id"),
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "email_taken"),
            AppError::TaxNumberAlreadyExists => (StatusCode::CONFLICT, "tax_number_taken"),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "invalid_credentials"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),
            AppError::ReservationNotFound => (StatusCode::NOT_FOUND, "reservation_not_found"),

            // Banco, timeout, bcrypt, JWT e afins: loga o detalhe, devolve mensagem genérica.
            e @ (AppError::StorageTimeout
            | AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_)) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        ApiError {
            status,
            message: i18n.translate(&locale.0, key),
            details: None,
        }
    }
}

// O erro já traduzido, pronto para sair como JSON
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.message, "details": details }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}
