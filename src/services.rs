// src/services.rs

pub mod partner_service;
pub mod reservation_service;
pub mod token_service;
