// src/handlers/reservations.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::{
        error::{ApiError, AppError},
        extract::AppJson,
    },
    config::AppState,
    middleware::{auth::AuthenticatedPartner, i18n::Locale},
    models::reservation::{DateWindow, MessageResponse, Reservation, ReservationPayload},
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListReservationsQuery {
    /// Início da janela (RFC 3339)
    pub start: Option<String>,
    /// Fim da janela (RFC 3339)
    pub end: Option<String>,
}

fn parse_bound(raw: Option<&str>, invalid: AppError) -> Result<Option<DateTime<Utc>>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| invalid),
    }
}

/// Cada limite informado precisa ser válido. A janela só vale com os dois.
fn parse_window(query: &ListReservationsQuery) -> Result<Option<DateWindow>, AppError> {
    let start = parse_bound(query.start.as_deref(), AppError::InvalidStartDate)?;
    let end = parse_bound(query.end.as_deref(), AppError::InvalidEndDate)?;

    Ok(match (start, end) {
        (Some(start), Some(end)) => Some(DateWindow { start, end }),
        _ => None,
    })
}

fn parse_reservation_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidReservationId)
}

// POST /api/reservations
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = "Reservations",
    request_body = ReservationPayload,
    responses(
        (status = 201, description = "Reserva criada", body = Reservation),
        (status = 400, description = "Campos ausentes ou inválidos"),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_reservation(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedPartner(partner_id): AuthenticatedPartner,
    AppJson(payload): AppJson<ReservationPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let reservation = app_state
        .reservation_service
        .create(partner_id, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

// GET /api/reservations?start=..&end=..
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "Reservations",
    params(ListReservationsQuery),
    responses(
        (status = 200, description = "Reservas do parceiro", body = [Reservation]),
        (status = 400, description = "Data inválida na consulta"),
        (status = 401, description = "Token ausente ou inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_reservations(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedPartner(partner_id): AuthenticatedPartner,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let to_api = |e: AppError| e.to_api_error(&locale, &app_state.i18n_store);

    let window = parse_window(&query).map_err(to_api)?;
    let reservations = app_state
        .reservation_service
        .list_for_owner(partner_id, window)
        .await
        .map_err(to_api)?;

    Ok(Json(reservations))
}

// PUT /api/reservations/{id}
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    request_body = ReservationPayload,
    responses(
        (status = 200, description = "Reserva atualizada", body = Reservation),
        (status = 400, description = "ID ou campos inválidos"),
        (status = 401, description = "Token ausente ou inválido"),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_reservation(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedPartner(partner_id): AuthenticatedPartner,
    Path(id): Path<String>,
    AppJson(payload): AppJson<ReservationPayload>,
) -> Result<Json<Reservation>, ApiError> {
    let to_api = |e: AppError| e.to_api_error(&locale, &app_state.i18n_store);

    let reservation_id = parse_reservation_id(&id).map_err(to_api)?;
    let reservation = app_state
        .reservation_service
        .update(partner_id, reservation_id, payload)
        .await
        .map_err(to_api)?;

    Ok(Json(reservation))
}

// DELETE /api/reservations/{id}
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "ID da reserva")),
    responses(
        (status = 200, description = "Reserva removida", body = MessageResponse),
        (status = 400, description = "ID inválido"),
        (status = 401, description = "Token ausente ou inválido"),
        (status = 404, description = "Reserva não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_reservation(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedPartner(partner_id): AuthenticatedPartner,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let to_api = |e: AppError| e.to_api_error(&locale, &app_state.i18n_store);

    let reservation_id = parse_reservation_id(&id).map_err(to_api)?;
    app_state
        .reservation_service
        .delete(partner_id, reservation_id)
        .await
        .map_err(to_api)?;

    Ok(Json(MessageResponse {
        message: app_state.i18n_store.translate(&locale.0, "reservation_deleted"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query(start: Option<&str>, end: Option<&str>) -> ListReservationsQuery {
        ListReservationsQuery {
            start: start.map(String::from),
            end: end.map(String::from),
        }
    }

    #[test]
    fn both_bounds_build_window() {
        let window = parse_window(&query(
            Some("2025-07-01T00:00:00Z"),
            Some("2025-07-31T23:59:59+03:00"),
        ))
        .unwrap()
        .unwrap();

        assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 7, 31, 20, 59, 59).unwrap());
    }

    #[test]
    fn single_or_empty_bound_means_no_window() {
        assert_eq!(parse_window(&query(None, None)).unwrap(), None);
        assert_eq!(parse_window(&query(Some("2025-07-01T00:00:00Z"), None)).unwrap(), None);
        assert_eq!(parse_window(&query(None, Some("2025-07-01T00:00:00Z"))).unwrap(), None);
        assert_eq!(parse_window(&query(Some(""), Some("2025-07-01T00:00:00Z"))).unwrap(), None);
    }

    #[test]
    fn malformed_bounds_are_reported_separately() {
        assert!(matches!(
            parse_window(&query(Some("yesterday"), Some("2025-07-01T00:00:00Z"))),
            Err(AppError::InvalidStartDate)
        ));
        assert!(matches!(
            parse_window(&query(Some("2025-07-01T00:00:00Z"), Some("2025-13-01"))),
            Err(AppError::InvalidEndDate)
        ));
        // mesmo sozinho, um limite malformado é erro
        assert!(matches!(
            parse_window(&query(None, Some("nope"))),
            Err(AppError::InvalidEndDate)
        ));
    }

    #[test]
    fn reservation_id_must_be_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_reservation_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_reservation_id("42"),
            Err(AppError::InvalidReservationId)
        ));
    }
}
