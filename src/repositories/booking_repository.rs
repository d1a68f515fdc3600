//! Repositorio de bookings
//!
//! Acceso a la tabla bookings. La actualización masiva de la reconciliación
//! se hace en un solo UPDATE, que en PostgreSQL es atómico: o se actualizan
//! todas las filas del batch o ninguna.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, NewBooking};
use crate::services::booking_status_service::BookingStatus;
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, user_id, vehicle_id, vehicle_name, vehicle_type, image_url,
                                  price_per_day, start_date, end_date, days, total_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_booking.user_id)
        .bind(new_booking.vehicle_id)
        .bind(new_booking.vehicle_name)
        .bind(new_booking.vehicle_type)
        .bind(new_booking.image_url)
        .bind(new_booking.price_per_day)
        .bind(new_booking.start_date)
        .bind(new_booking.end_date)
        .bind(new_booking.days)
        .bind(new_booking.total_price)
        .bind(new_booking.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Reservas de un usuario, más recientes primero
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Todas las reservas del sistema, para el panel de administración
    pub async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(bookings)
    }

    /// Reservas de un usuario con un estado almacenado dado
    pub async fn find_by_user_and_status(
        &self,
        user_id: Uuid,
        status: BookingStatus,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 AND status = $2",
        )
        .bind(user_id)
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Marcar un batch de reservas como completed en una sola escritura
    ///
    /// Devuelve la cantidad de filas actualizadas.
    pub async fn mark_completed(&self, ids: &[Uuid]) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE bookings SET status = 'completed' WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Borrar las reservas de un usuario dentro de una transacción existente
    ///
    /// Solo se usa como efecto colateral del borrado de cuenta.
    pub async fn delete_by_user(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}
