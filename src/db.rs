// src/db.rs

pub mod partner_repo;
pub use partner_repo::{PartnerRepository, PgPartnerRepository};
pub mod reservation_repo;
pub use reservation_repo::{PgReservationRepository, ReservationRepository};

#[cfg(test)]
pub mod memory;
