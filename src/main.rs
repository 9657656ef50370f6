//src/main.rs

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;

#[cfg(test)]
mod tests;

use crate::config::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // O .env precisa ser lido antes do filtro de log (RUST_LOG pode estar nele)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;
    let app_state = AppState::new(&config).await?;

    let app = routes::router(app_state)
        .layer(routes::cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    // Inicia o servidor
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    tracing::info!("📚 Documentação em http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
