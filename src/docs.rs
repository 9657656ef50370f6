// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;
use crate::common;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Partners ---
        handlers::auth::register,
        handlers::auth::login,

        // --- Reservations ---
        handlers::reservations::create_reservation,
        handlers::reservations::list_reservations,
        handlers::reservations::update_reservation,
        handlers::reservations::delete_reservation,
    ),
    components(
        schemas(
            // --- Partners ---
            models::partner::PartnerView,
            models::partner::RegisterPartnerPayload,
            models::partner::LoginPartnerPayload,
            models::partner::RegisterResponse,
            models::partner::LoginResponse,

            // --- Reservations ---
            models::reservation::RecurrenceJson,
            models::reservation::Reservation,
            models::reservation::ReservationPayload,
            models::reservation::MessageResponse,

            // --- Erros ---
            common::validation::FieldError,
        )
    ),
    tags(
        (name = "Partners", description = "Registro e Login de Parceiros"),
        (name = "Reservations", description = "Agenda de Reservas do Parceiro")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
