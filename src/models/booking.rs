//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking y sus variantes. Una reserva
//! congela al crearse los datos del vehículo (nombre, tipo, imagen, precio
//! por día), el número de días y el precio total; esos campos no se
//! recalculan después.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::services::booking_status_service::BookingStatus;

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    // Snapshot del vehículo tomado al crear la reserva
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub image_url: Option<String>,
    pub price_per_day: Decimal,
    pub start_date: NaiveDate,
    // Nullable: datos legacy pueden venir sin fecha de fin
    pub end_date: Option<NaiveDate>,
    pub days: i32,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Estado almacenado normalizado al enum canónico
    pub fn stored_status(&self) -> BookingStatus {
        BookingStatus::from_store(&self.status)
    }
}

/// Datos para insertar una nueva reserva
///
/// El snapshot del vehículo y los montos ya vienen calculados por el
/// controller; el repositorio no recalcula nada.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub image_url: Option<String>,
    pub price_per_day: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i32,
    pub total_price: Decimal,
    pub status: BookingStatus,
}

/// Número de días de alquiler, incluyendo ambos extremos
pub fn rental_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_days_inclusive() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        assert_eq!(rental_days(start, end), 3);
    }

    #[test]
    fn test_rental_days_same_day() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(rental_days(day, day), 1);
    }
}
