// src/routes.rs

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::{AppState, Config},
    docs::ApiDoc,
    handlers,
    middleware::auth::auth_guard,
};

pub fn router(app_state: AppState) -> Router {
    // Rotas de parceiros (públicas)
    let partner_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Rotas de reservas (protegidas pelo middleware). Caminhos completos para que
    // "/api/reservations/" também responda; `route_layer` deixa o 405 passar sem token.
    let reservation_routes = Router::new()
        .route(
            "/api/reservations",
            post(handlers::reservations::create_reservation)
                .get(handlers::reservations::list_reservations),
        )
        .route(
            "/api/reservations/",
            post(handlers::reservations::create_reservation)
                .get(handlers::reservations::list_reservations),
        )
        .route(
            "/api/reservations/{id}",
            put(handlers::reservations::update_reservation)
                .delete(handlers::reservations::delete_reservation),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/partners", partner_routes)
        .merge(reservation_routes)
        .with_state(app_state)
}

pub fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = config.cors_allowed_origin.parse()?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ]))
}
