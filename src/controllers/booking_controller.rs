//! Controller de bookings
//!
//! Crea reservas congelando el snapshot del vehículo y los montos, arma el
//! dashboard del usuario (reconciliación + listado + contadores) y aplica
//! las transiciones de estado del panel de administración.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    BookingResponse, CreateBookingRequest, MyBookingsResponse, UpdateBookingStatusRequest,
};
use crate::models::booking::{rental_days, NewBooking};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::booking_stats_service::summarize_bookings;
use crate::services::booking_status_service::BookingStatus;
use crate::services::reconciliation_service::ReconciliationService;
use crate::utils::errors::{forbidden_error, AppError};
use crate::utils::validation::is_future_or_today;

pub struct BookingController {
    repository: BookingRepository,
    vehicle_repository: VehicleRepository,
    reconciliation: ReconciliationService,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            reconciliation: ReconciliationService::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let today = Utc::now().date_naive();

        // Validar fechas
        if request.end_date < request.start_date {
            return Err(AppError::BadRequest(
                "La fecha de fin debe ser posterior a la de inicio".to_string(),
            ));
        }
        if !is_future_or_today(request.start_date, today) {
            return Err(AppError::BadRequest(
                "La fecha de inicio no puede estar en el pasado".to_string(),
            ));
        }

        // Obtener el vehículo para congelar su snapshot
        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Días inclusivos y precio total, calculados una sola vez
        let days = rental_days(request.start_date, request.end_date) as i32;
        let total_price = vehicle.price_per_day * rust_decimal::Decimal::from(days);

        let booking = self
            .repository
            .create(NewBooking {
                user_id,
                vehicle_id: vehicle.id,
                vehicle_name: vehicle.vehicle_name,
                vehicle_type: vehicle.vehicle_type,
                image_url: vehicle.image_url,
                price_per_day: vehicle.price_per_day,
                start_date: request.start_date,
                end_date: request.end_date,
                days,
                total_price,
                status: BookingStatus::Upcoming,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from_booking(booking, today),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    /// Dashboard del usuario: reconciliar, listar y contar
    pub async fn my_bookings(&self, user_id: Uuid) -> Result<MyBookingsResponse, AppError> {
        let today = Utc::now().date_naive();

        // Convergencia de estados antes de leer; un fallo acá no es fatal,
        // la derivación on-the-fly muestra el estado correcto igual
        if let Err(e) = self.reconciliation.reconcile_user(user_id, today).await {
            tracing::warn!("Reconciliación falló para usuario {}: {}", user_id, e);
        }

        let bookings = self.repository.find_by_user(user_id).await?;
        let stats = summarize_bookings(&bookings, today);

        let bookings = bookings
            .into_iter()
            .map(|b| BookingResponse::from_booking(b, today))
            .collect();

        Ok(MyBookingsResponse { stats, bookings })
    }

    /// Cancelación por el dueño de la reserva
    pub async fn cancel(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if booking.user_id != user_id {
            return Err(forbidden_error("cancel booking", "not the booking owner"));
        }

        let current = booking.stored_status();
        if !current.can_transition_to(BookingStatus::Canceled) {
            return Err(AppError::Conflict(format!(
                "No se puede cancelar una reserva en estado {}",
                current
            )));
        }

        let booking = self
            .repository
            .update_status(id, BookingStatus::Canceled)
            .await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from_booking(booking, Utc::now().date_naive()),
            "Reserva cancelada exitosamente".to_string(),
        ))
    }

    /// Listado completo para el panel de administración
    pub async fn list_all(&self) -> Result<Vec<BookingResponse>, AppError> {
        let today = Utc::now().date_naive();
        let bookings = self.repository.find_all().await?;

        Ok(bookings
            .into_iter()
            .map(|b| BookingResponse::from_booking(b, today))
            .collect())
    }

    /// Cambio de estado por un administrador, con reglas de transición
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let next = BookingStatus::from_store(&request.status);

        let booking = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let current = booking.stored_status();
        if !current.can_transition_to(next) {
            return Err(AppError::Conflict(format!(
                "Transición inválida: {} → {}",
                current, next
            )));
        }

        let booking = self.repository.update_status(id, next).await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from_booking(booking, Utc::now().date_naive()),
            "Estado de la reserva actualizado".to_string(),
        ))
    }

}
