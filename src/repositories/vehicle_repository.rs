//! Repositorio de vehículos
//!
//! Acceso a la tabla vehicles. El filtrado del catálogo público se hace en
//! memoria sobre el snapshot cacheado, no acá.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_name: String,
        vehicle_type: String,
        price_per_day: Decimal,
        seats: i32,
        features: Vec<String>,
        image_url: Option<String>,
        status: VehicleStatus,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, vehicle_name, vehicle_type, price_per_day, seats, features, image_url, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_name)
        .bind(vehicle_type)
        .bind(price_per_day)
        .bind(seats)
        .bind(features)
        .bind(image_url)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        vehicle_name: Option<String>,
        vehicle_type: Option<String>,
        price_per_day: Option<Decimal>,
        seats: Option<i32>,
        features: Option<Vec<String>>,
        // Capa externa: ¿tocar el campo? Interna: el valor nuevo, o NULL
        image_url: Option<Option<String>>,
        status: Option<VehicleStatus>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET vehicle_name = $2, vehicle_type = $3, price_per_day = $4, seats = $5,
                features = $6, image_url = $7, status = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_name.unwrap_or(current.vehicle_name))
        .bind(vehicle_type.unwrap_or(current.vehicle_type))
        .bind(price_per_day.unwrap_or(current.price_per_day))
        .bind(seats.unwrap_or(current.seats))
        .bind(features.unwrap_or(current.features))
        .bind(image_url.unwrap_or(current.image_url))
        .bind(
            status
                .map(|s| s.as_str().to_string())
                .unwrap_or(current.status),
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
