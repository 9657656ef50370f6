// src/db/partner_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{common::error::AppError, models::partner::Partner};

/// Acesso à coleção de parceiros. O serviço só conhece este trait.
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;

    async fn tax_number_exists(&self, tax_number: &str) -> Result<bool, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Partner>, AppError>;

    /// Falha com `EmailAlreadyExists`/`TaxNumberAlreadyExists` se a
    /// unicidade for violada no próprio armazenamento.
    async fn insert(&self, partner: &Partner) -> Result<Partner, AppError>;
}

// O repositório de parceiros, responsável pela tabela 'partners'
#[derive(Clone)]
pub struct PgPartnerRepository {
    pool: PgPool,
}

impl PgPartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerRepository for PgPartnerRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM partners WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn tax_number_exists(&self, tax_number: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM partners WHERE tax_number = $1)",
        )
        .bind(tax_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Partner>, AppError> {
        let maybe_partner =
            sqlx::query_as::<_, Partner>("SELECT * FROM partners WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(maybe_partner)
    }

    async fn insert(&self, partner: &Partner) -> Result<Partner, AppError> {
        sqlx::query_as::<_, Partner>(
            r#"
            INSERT INTO partners (
                id, company_name, email, password_hash, phone_number,
                address, city, business_type, tax_number, contact_person,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(partner.id)
        .bind(&partner.company_name)
        .bind(&partner.email)
        .bind(&partner.password_hash)
        .bind(&partner.phone_number)
        .bind(&partner.address)
        .bind(&partner.city)
        .bind(&partner.business_type)
        .bind(&partner.tax_number)
        .bind(&partner.contact_person)
        .bind(partner.created_at)
        .bind(partner.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Dois cadastros simultâneos podem passar pelas checagens de
            // existência; a constraint UNIQUE decide qual deles perde.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    match db_err.constraint() {
                        Some("partners_email_key") => return AppError::EmailAlreadyExists,
                        Some("partners_tax_number_key") => {
                            return AppError::TaxNumberAlreadyExists;
                        }
                        _ => {}
                    }
                }
            }
            e.into()
        })
    }
}
