//! Reconciliación de estados de reservas
//!
//! Con el tiempo, reservas que siguen almacenadas como `upcoming` quedan con
//! su fecha de fin en el pasado. Esta pasada converge el estado persistido
//! con el estado derivado, marcándolas `completed` en un solo batch.
//!
//! La pasada es idempotente: correrla dos veces con el mismo reloj no genera
//! escrituras adicionales. Si el batch falla no se reintenta; la próxima
//! pasada (o la derivación on-the-fly del resolver) se encarga.

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::repositories::booking_repository::BookingRepository;
use crate::services::booking_status_service::{resolve_status, BookingStatus};
use crate::utils::errors::AppError;

/// Seleccionar las reservas upcoming cuya fecha de fin ya pasó
///
/// Función pura: la selección depende solo de la colección y de `today`.
/// Reservas sin fecha de fin no se reconcilian (el resolver ya las muestra
/// como completed); solo se persisten transiciones con fecha real vencida.
pub fn expired_upcoming_ids(bookings: &[Booking], today: NaiveDate) -> Vec<Uuid> {
    bookings
        .iter()
        .filter(|b| b.stored_status() == BookingStatus::Upcoming)
        .filter(|b| match b.end_date {
            Some(_) => resolve_status(b.stored_status(), b.end_date, today).is_past,
            None => false,
        })
        .map(|b| b.id)
        .collect()
}

pub struct ReconciliationService {
    repository: BookingRepository,
}

impl ReconciliationService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool),
        }
    }

    /// Reconciliar las reservas de un usuario
    ///
    /// Devuelve la cantidad de reservas actualizadas. Cuando nada califica no
    /// se emite ninguna escritura.
    pub async fn reconcile_user(&self, user_id: Uuid, today: NaiveDate) -> Result<u64, AppError> {
        let upcoming = self
            .repository
            .find_by_user_and_status(user_id, BookingStatus::Upcoming)
            .await?;

        let expired = expired_upcoming_ids(&upcoming, today);
        if expired.is_empty() {
            return Ok(0);
        }

        let updated = self.repository.mark_completed(&expired).await?;
        info!(
            "🔄 Reconciliación: {} reservas marcadas completed para usuario {}",
            updated, user_id
        );

        Ok(updated)
    }
}
