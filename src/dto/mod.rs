//! DTOs de la API

pub mod admin_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod review_dto;
pub mod vehicle_dto;
