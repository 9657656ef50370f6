// src/services/partner_service.rs

use std::{sync::Arc, time::Duration};

use bcrypt::{hash, verify};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{db_utils::with_timeout, error::AppError},
    db::PartnerRepository,
    models::partner::{LoginPartnerPayload, Partner, PartnerView, RegisterPartnerPayload},
};

#[derive(Clone)]
pub struct PartnerService {
    partner_repo: Arc<dyn PartnerRepository>,
    bcrypt_cost: u32,
    store_timeout: Duration,
}

impl PartnerService {
    pub fn new(
        partner_repo: Arc<dyn PartnerRepository>,
        bcrypt_cost: u32,
        store_timeout: Duration,
    ) -> Self {
        Self { partner_repo, bcrypt_cost, store_timeout }
    }

    /// Valida, checa unicidade (e-mail primeiro, depois número fiscal),
    /// gera o hash da senha e grava. Devolve a visão sem senha.
    pub async fn register(&self, payload: RegisterPartnerPayload) -> Result<PartnerView, AppError> {
        payload.validate()?;

        if with_timeout(self.store_timeout, self.partner_repo.email_exists(&payload.email)).await? {
            return Err(AppError::EmailAlreadyExists);
        }
        if with_timeout(
            self.store_timeout,
            self.partner_repo.tax_number_exists(&payload.tax_number),
        )
        .await?
        {
            return Err(AppError::TaxNumberAlreadyExists);
        }

        // Hashing em thread separada: bcrypt é caro de propósito
        let cost = self.bcrypt_cost;
        let password = payload.password;
        let password_hash = tokio::task::spawn_blocking(move || hash(&password, cost))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let now = Utc::now();
        let partner = Partner {
            id: Uuid::new_v4(),
            company_name: payload.company_name,
            email: payload.email,
            password_hash,
            phone_number: payload.phone_number,
            address: payload.address,
            city: payload.city,
            business_type: payload.business_type,
            tax_number: payload.tax_number,
            contact_person: payload.contact_person,
            created_at: now,
            updated_at: now,
        };

        let created = with_timeout(self.store_timeout, self.partner_repo.insert(&partner)).await?;
        tracing::info!(partner_id = %created.id, "✅ Parceiro registrado");

        Ok(created.into())
    }

    /// E-mail desconhecido e senha errada produzem exatamente o mesmo erro.
    /// Não emite token: isso fica a cargo de quem chama.
    pub async fn authenticate(&self, payload: LoginPartnerPayload) -> Result<PartnerView, AppError> {
        payload.validate()?;

        let Some(partner) =
            with_timeout(self.store_timeout, self.partner_repo.find_by_email(&payload.email)).await?
        else {
            tracing::debug!("Login recusado: e-mail desconhecido");
            return Err(AppError::InvalidCredentials);
        };

        let password = payload.password;
        let password_hash = partner.password_hash.clone();
        let is_password_valid = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            tracing::debug!(partner_id = %partner.id, "Login recusado: senha incorreta");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(partner_id = %partner.id, "🔑 Login realizado");
        Ok(partner.into())
    }
}
