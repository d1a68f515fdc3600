//! Repositorio de reviews
//!
//! Acceso a la tabla reviews. Las reviews son inmutables: solo insert y
//! lecturas para agregación.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::review::{RatingSummary, Review};
use crate::utils::errors::AppError;

pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        user_id: Uuid,
        user_name: String,
        rating: i32,
        comment: String,
    ) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (id, vehicle_id, user_id, user_name, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_id)
        .bind(user_id)
        .bind(user_name)
        .bind(rating)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    /// Reviews de un vehículo, más recientes primero
    pub async fn find_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Review>, AppError> {
        let reviews = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE vehicle_id = $1 ORDER BY created_at DESC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    /// Resumen de ratings de un vehículo
    pub async fn rating_summary(&self, vehicle_id: Uuid) -> Result<RatingSummary, AppError> {
        let ratings: Vec<(i32,)> =
            sqlx::query_as("SELECT rating FROM reviews WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_all(&self.pool)
                .await?;

        let ratings: Vec<i32> = ratings.into_iter().map(|(r,)| r).collect();
        Ok(RatingSummary::from_ratings(&ratings))
    }

    /// Borrar las reviews de un usuario dentro de una transacción existente
    pub async fn delete_by_user(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: Uuid,
    ) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}
