// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::{bail, Context};
use sqlx::postgres::PgPoolOptions;

use crate::{
    common::i18n::I18nStore,
    db::{PartnerRepository, PgPartnerRepository, PgReservationRepository, ReservationRepository},
    services::{
        partner_service::PartnerService,
        reservation_service::ReservationService,
        token_service::{TokenService, DEFAULT_TOKEN_TTL_HOURS},
    },
};

// Sem Debug de propósito: carrega o segredo do JWT
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub store_timeout: Duration,
    pub db_max_connections: u32,
    pub cors_allowed_origin: String,
}

impl Config {
    /// Lê as variáveis de ambiente (o `.env` já deve ter sido carregado).
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET não pode ser vazio");
        }
        if jwt_secret.len() < 32 {
            tracing::warn!("⚠️ JWT_SECRET tem menos de 32 bytes");
        }

        let bcrypt_cost: u32 = env_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST deve estar entre 4 e 31 (recebido {bcrypt_cost})");
        }

        let token_ttl_hours: i64 = env_or("TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?;
        if token_ttl_hours <= 0 {
            bail!("TOKEN_TTL_HOURS deve ser positivo");
        }

        Ok(Self {
            database_url,
            jwt_secret,
            port: env_or("PORT", 5000)?,
            token_ttl_hours,
            bcrypt_cost,
            store_timeout: Duration::from_secs(env_or("STORE_TIMEOUT_SECS", 10)?),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5)?,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} inválida: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[derive(Clone)]
pub struct AppState {
    pub partner_service: PartnerService,
    pub reservation_service: ReservationService,
    pub token_service: TokenService,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    /// Conecta ao banco, roda as migrações e monta o gráfico de dependências.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.store_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        sqlx::migrate!()
            .run(&db_pool)
            .await
            .context("Falha ao rodar as migrações do banco de dados")?;

        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

        Ok(Self::with_repositories(
            config,
            Arc::new(PgPartnerRepository::new(db_pool.clone())),
            Arc::new(PgReservationRepository::new(db_pool)),
        ))
    }

    pub fn with_repositories(
        config: &Config,
        partner_repo: Arc<dyn PartnerRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            partner_service: PartnerService::new(
                partner_repo,
                config.bcrypt_cost,
                config.store_timeout,
            ),
            reservation_service: ReservationService::new(reservation_repo, config.store_timeout),
            token_service: TokenService::new(
                &config.jwt_secret,
                chrono::Duration::hours(config.token_ttl_hours),
            ),
            i18n_store: Arc::new(I18nStore::new()),
        }
    }
}
