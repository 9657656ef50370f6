// src/services/token_service.rs

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{common::error::AppError, models::partner::Claims};

// Único algoritmo aceito. Outros HMAC (HS384/HS512), "none" e assimétricos são recusados.
const ALGORITHM: Algorithm = Algorithm::HS256;

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// O segredo vem da configuração; nunca de uma constante no código.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn issue(&self, partner_id: Uuid) -> Result<IssuedToken, AppError> {
        self.issue_at(partner_id, Utc::now())
    }

    fn issue_at(&self, partner_id: Uuid, issued_at: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: partner_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Devolve o ID do parceiro. Qualquer falha vira `InvalidToken`,
    /// o motivo real só aparece no log.
    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims.sub)
            .map_err(|e| {
                tracing::debug!("Token recusado: {:?}", e.kind());
                AppError::InvalidToken
            })
    }
}
