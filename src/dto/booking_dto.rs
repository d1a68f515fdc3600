//! DTOs de bookings

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::Booking;
use crate::models::stats::BookingStatsSummary;
use crate::services::booking_status_service::{resolve_status, DisplayStatus};

/// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Request de cambio de estado (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

/// Response de reserva, con el estado visible ya resuelto
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub image_url: Option<String>,
    pub price_per_day: Decimal,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub days: i32,
    pub total_price: Decimal,
    pub status: String,
    pub display_status: DisplayStatus,
    pub is_past: bool,
    pub created_at: DateTime<Utc>,
}

impl BookingResponse {
    /// Construir la response resolviendo el estado contra `today`
    pub fn from_booking(booking: Booking, today: NaiveDate) -> Self {
        let resolution = resolve_status(booking.stored_status(), booking.end_date, today);
        Self {
            id: booking.id,
            user_id: booking.user_id,
            vehicle_id: booking.vehicle_id,
            vehicle_name: booking.vehicle_name,
            vehicle_type: booking.vehicle_type,
            image_url: booking.image_url,
            price_per_day: booking.price_per_day,
            start_date: booking.start_date,
            end_date: booking.end_date,
            days: booking.days,
            total_price: booking.total_price,
            status: booking.status,
            display_status: resolution.display_status,
            is_past: resolution.is_past,
            created_at: booking.created_at,
        }
    }
}

/// Dashboard del usuario: contadores + reservas
#[derive(Debug, Serialize)]
pub struct MyBookingsResponse {
    pub stats: BookingStatsSummary,
    pub bookings: Vec<BookingResponse>,
}
