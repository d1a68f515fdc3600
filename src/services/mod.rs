//! Servicios de negocio
//!
//! La lógica de estado y agregación de reservas vive acá como funciones
//! puras; los servicios con estado envuelven repositorios.

pub mod booking_stats_service;
pub mod booking_status_service;
pub mod jwt_service;
pub mod reconciliation_service;
pub mod report_service;
