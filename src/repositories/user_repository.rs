//! Repositorio de usuarios
//!
//! Acceso a la tabla users. El borrado de cuenta elimina en una sola
//! transacción las reviews y bookings del usuario junto con su fila.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{User, UserRole};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::utils::errors::AppError;

pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: String,
        email: String,
        password_hash: String,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, full_name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, 'user', NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    pub async fn update_role(&self, id: Uuid, role: UserRole) -> Result<User, AppError> {
        let user =
            sqlx::query_as::<_, User>("UPDATE users SET role = $2 WHERE id = $1 RETURNING *")
                .bind(id)
                .bind(role.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(user)
    }

    /// Borrado de cuenta: reviews, bookings y usuario en una transacción
    pub async fn delete_account(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        ReviewRepository::delete_by_user(&mut tx, id).await?;
        BookingRepository::delete_by_user(&mut tx, id).await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }
}
