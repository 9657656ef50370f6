// src/db/memory.rs
//
// Repositórios em memória para os testes. Seguem as mesmas regras das
// tabelas: unicidade de e-mail/número fiscal e filtro por dono.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{PartnerRepository, ReservationRepository},
    models::{
        partner::Partner,
        reservation::{DateWindow, Reservation, ReservationFields},
    },
};

#[derive(Default)]
pub struct InMemoryPartnerRepository {
    partners: Mutex<Vec<Partner>>,
}

impl InMemoryPartnerRepository {
    pub fn len(&self) -> usize {
        self.partners.lock().unwrap().len()
    }
}

#[async_trait]
impl PartnerRepository for InMemoryPartnerRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.partners.lock().unwrap().iter().any(|p| p.email == email))
    }

    async fn tax_number_exists(&self, tax_number: &str) -> Result<bool, AppError> {
        Ok(self
            .partners
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.tax_number == tax_number))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Partner>, AppError> {
        Ok(self
            .partners
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn insert(&self, partner: &Partner) -> Result<Partner, AppError> {
        let mut partners = self.partners.lock().unwrap();
        if partners.iter().any(|p| p.email == partner.email) {
            return Err(AppError::EmailAlreadyExists);
        }
        if partners.iter().any(|p| p.tax_number == partner.tax_number) {
            return Err(AppError::TaxNumberAlreadyExists);
        }
        partners.push(partner.clone());
        Ok(partner.clone())
    }
}

#[derive(Default)]
pub struct InMemoryReservationRepository {
    reservations: Mutex<Vec<Reservation>>,
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn insert(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        self.reservations.lock().unwrap().push(reservation.clone());
        Ok(reservation.clone())
    }

    async fn list_for_partner(
        &self,
        partner_id: Uuid,
        window: Option<DateWindow>,
    ) -> Result<Vec<Reservation>, AppError> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.partner_id == partner_id)
            .filter(|r| window.is_none_or(|w| w.touches(r)))
            .cloned()
            .collect())
    }

    async fn update_owned(
        &self,
        partner_id: Uuid,
        id: Uuid,
        fields: &ReservationFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Reservation>, AppError> {
        let mut reservations = self.reservations.lock().unwrap();
        let Some(existing) = reservations
            .iter_mut()
            .find(|r| r.id == id && r.partner_id == partner_id)
        else {
            return Ok(None);
        };

        existing.name = fields.name.clone();
        existing.start_date = fields.start_date;
        existing.end_date = fields.end_date;
        existing.is_all_day = fields.is_all_day;
        existing.is_multi_day = fields.is_multi_day;
        existing.capacity = fields.capacity;
        existing.recurrence = fields.recurrence.clone();
        existing.updated_at = updated_at;
        Ok(Some(existing.clone()))
    }

    async fn delete_owned(&self, partner_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut reservations = self.reservations.lock().unwrap();
        let before = reservations.len();
        reservations.retain(|r| !(r.id == id && r.partner_id == partner_id));
        Ok(reservations.len() < before)
    }
}
