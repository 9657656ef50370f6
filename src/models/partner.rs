// src/models/partner.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Representa um parceiro (empresa) vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: Uuid,
    pub company_name: String,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub business_type: String,
    pub tax_number: String,
    pub contact_person: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projeção pública do parceiro. Nunca carrega a senha, nem o hash.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartnerView {
    pub id: Uuid,
    #[schema(example = "Acme Turizm")]
    pub company_name: String,
    #[schema(example = "contato@acme.com")]
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub business_type: String,
    pub tax_number: String,
    pub contact_person: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Partner> for PartnerView {
    fn from(p: Partner) -> Self {
        Self {
            id: p.id,
            company_name: p.company_name,
            email: p.email,
            phone_number: p.phone_number,
            address: p.address,
            city: p.city,
            business_type: p.business_type,
            tax_number: p.tax_number,
            contact_person: p.contact_person,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// Dados para registro de um novo parceiro.
// Os `code` são chaves do I18nStore, não o texto final.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPartnerPayload {
    #[serde(default)]
    #[validate(length(min = 1, code = "company_name_required"))]
    #[schema(example = "Acme Turizm")]
    pub company_name: String,

    #[serde(default)]
    #[validate(custom(function = "crate::common::validation::email_field"))]
    #[schema(example = "contato@acme.com")]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "crate::common::validation::password_field"))]
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "phone_number_required"))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "address_required"))]
    pub address: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "city_required"))]
    pub city: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "business_type_required"))]
    pub business_type: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "tax_number_required"))]
    pub tax_number: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "contact_person_required"))]
    pub contact_person: String,
}

// Dados para login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginPartnerPayload {
    #[serde(default)]
    #[validate(custom(function = "crate::common::validation::email_field"))]
    #[schema(example = "contato@acme.com")]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "password_required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub partner: PartnerView,
}

// Resposta de login. O handler sempre preenche token e expiresAt
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub partner: PartnerView,
}

// Estrutura de dados ("claims") dentro do JWT. Conjunto fixo, sem mapa aberto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: Uuid, // ID do parceiro
    pub iat: i64,
    pub exp: i64,
}
