//! Controllers de la aplicación

pub mod admin_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod review_controller;
pub mod vehicle_controller;
