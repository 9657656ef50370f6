// src/db/reservation_repo.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::reservation::{DateWindow, Reservation, ReservationFields},
};

/// Todas as operações por id também filtram pelo dono, no mesmo comando.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn insert(&self, reservation: &Reservation) -> Result<Reservation, AppError>;

    async fn list_for_partner(
        &self,
        partner_id: Uuid,
        window: Option<DateWindow>,
    ) -> Result<Vec<Reservation>, AppError>;

    /// `None` quando nenhuma reserva tem esse id E esse dono.
    async fn update_owned(
        &self,
        partner_id: Uuid,
        id: Uuid,
        fields: &ReservationFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Reservation>, AppError>;

    /// `false` quando nada foi removido.
    async fn delete_owned(&self, partner_id: Uuid, id: Uuid) -> Result<bool, AppError>;
}

#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        let saved = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (
                id, partner_id, name, start_date, end_date,
                is_all_day, is_multi_day, capacity, recurrence,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(reservation.id)
        .bind(reservation.partner_id)
        .bind(&reservation.name)
        .bind(reservation.start_date)
        .bind(reservation.end_date)
        .bind(reservation.is_all_day)
        .bind(reservation.is_multi_day)
        .bind(reservation.capacity)
        .bind(Json(&reservation.recurrence))
        .bind(reservation.created_at)
        .bind(reservation.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn list_for_partner(
        &self,
        partner_id: Uuid,
        window: Option<DateWindow>,
    ) -> Result<Vec<Reservation>, AppError> {
        let reservations = match window {
            None => {
                sqlx::query_as::<_, Reservation>(
                    r#"
                    SELECT * FROM reservations
                    WHERE partner_id = $1
                    ORDER BY created_at, id
                    "#,
                )
                .bind(partner_id)
                .fetch_all(&self.pool)
                .await?
            }
            // Mesmo critério de DateWindow::touches: início OU fim na janela
            Some(window) => {
                sqlx::query_as::<_, Reservation>(
                    r#"
                    SELECT * FROM reservations
                    WHERE partner_id = $1
                      AND (
                        (start_date >= $2 AND start_date <= $3)
                        OR (end_date >= $2 AND end_date <= $3)
                      )
                    ORDER BY created_at, id
                    "#,
                )
                .bind(partner_id)
                .bind(window.start)
                .bind(window.end)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(reservations)
    }

    async fn update_owned(
        &self,
        partner_id: Uuid,
        id: Uuid,
        fields: &ReservationFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Reservation>, AppError> {
        let updated = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET name = $3,
                start_date = $4,
                end_date = $5,
                is_all_day = $6,
                is_multi_day = $7,
                capacity = $8,
                recurrence = $9,
                updated_at = $10
            WHERE id = $1 AND partner_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(partner_id)
        .bind(&fields.name)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .bind(fields.is_all_day)
        .bind(fields.is_multi_day)
        .bind(fields.capacity)
        .bind(Json(&fields.recurrence))
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_owned(&self, partner_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1 AND partner_id = $2")
            .bind(id)
            .bind(partner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
