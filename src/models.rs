// src/models.rs

pub mod partner;
pub mod reservation;
