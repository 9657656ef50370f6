// src/services/reservation_service.rs

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::{db_utils::with_timeout, error::AppError},
    db::ReservationRepository,
    models::reservation::{DateWindow, Reservation, ReservationFields, ReservationPayload},
};

#[derive(Clone)]
pub struct ReservationService {
    reservation_repo: Arc<dyn ReservationRepository>,
    store_timeout: Duration,
}

impl ReservationService {
    pub fn new(reservation_repo: Arc<dyn ReservationRepository>, store_timeout: Duration) -> Self {
        Self { reservation_repo, store_timeout }
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        payload: ReservationPayload,
    ) -> Result<Reservation, AppError> {
        let fields = ReservationFields::try_from(payload)?;

        let now = Utc::now();
        let reservation = Reservation {
            id: Uuid::new_v4(),
            partner_id: owner_id,
            name: fields.name,
            start_date: fields.start_date,
            end_date: fields.end_date,
            is_all_day: fields.is_all_day,
            is_multi_day: fields.is_multi_day,
            capacity: fields.capacity,
            recurrence: fields.recurrence,
            created_at: now,
            updated_at: now,
        };

        let saved =
            with_timeout(self.store_timeout, self.reservation_repo.insert(&reservation)).await?;
        tracing::info!(partner_id = %owner_id, reservation_id = %saved.id, "📅 Reserva criada");
        Ok(saved)
    }

    /// Só as reservas do dono. Com janela: início OU fim dentro dela.
    pub async fn list_for_owner(
        &self,
        owner_id: Uuid,
        window: Option<DateWindow>,
    ) -> Result<Vec<Reservation>, AppError> {
        with_timeout(
            self.store_timeout,
            self.reservation_repo.list_for_partner(owner_id, window),
        )
        .await
    }

    // "Não existe" e "é de outro parceiro" dão o mesmo ReservationNotFound
    pub async fn update(
        &self,
        owner_id: Uuid,
        reservation_id: Uuid,
        payload: ReservationPayload,
    ) -> Result<Reservation, AppError> {
        let fields = ReservationFields::try_from(payload)?;

        let updated = with_timeout(
            self.store_timeout,
            self.reservation_repo
                .update_owned(owner_id, reservation_id, &fields, Utc::now()),
        )
        .await?
        .ok_or(AppError::ReservationNotFound)?;

        tracing::info!(partner_id = %owner_id, %reservation_id, "Reserva atualizada");
        Ok(updated)
    }

    pub async fn delete(&self, owner_id: Uuid, reservation_id: Uuid) -> Result<(), AppError> {
        let deleted = with_timeout(
            self.store_timeout,
            self.reservation_repo.delete_owned(owner_id, reservation_id),
        )
        .await?;

        if !deleted {
            return Err(AppError::ReservationNotFound);
        }

        tracing::info!(partner_id = %owner_id, %reservation_id, "Reserva removida");
        Ok(())
    }
}
