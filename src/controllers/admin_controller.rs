//! Controller del panel de administración
//!
//! Arma el reporte del dashboard con fetches concurrentes y administra los
//! roles de usuario.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::{AdminReportResponse, UpdateUserRoleRequest};
use crate::dto::auth_dto::{ApiResponse, UserResponse};
use crate::models::user::UserRole;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::report_service;
use crate::utils::errors::AppError;

pub struct AdminController {
    booking_repository: BookingRepository,
    vehicle_repository: VehicleRepository,
    user_repository: UserRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            booking_repository: BookingRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            user_repository: UserRepository::new(pool),
        }
    }

    /// Reporte completo del dashboard
    pub async fn report(&self) -> Result<AdminReportResponse, AppError> {
        let today = Utc::now().date_naive();

        // Las tres fuentes se consultan en paralelo
        let (bookings, vehicles, total_users) = futures::try_join!(
            self.booking_repository.find_all(),
            self.vehicle_repository.find_all(),
            self.user_repository.count(),
        )?;

        Ok(AdminReportResponse {
            summary: report_service::build_summary(&bookings, &vehicles, total_users),
            monthly_bookings: report_service::monthly_breakdown(&bookings, today),
            popular_vehicles: report_service::popular_vehicles(&bookings),
        })
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repository.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Cambiar el rol de un usuario; un admin no puede degradarse a sí mismo
    pub async fn update_user_role(
        &self,
        admin_id: Uuid,
        user_id: Uuid,
        request: UpdateUserRoleRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        if admin_id == user_id {
            return Err(AppError::Forbidden(
                "No puedes cambiar tu propio rol".to_string(),
            ));
        }

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let role = match request.role.trim().to_lowercase().as_str() {
            "admin" => UserRole::Admin,
            "user" => UserRole::User,
            other => {
                return Err(AppError::BadRequest(format!("Rol desconocido: {}", other)));
            }
        };
        let user = self.user_repository.update_role(user_id, role).await?;

        tracing::info!("✅ Rol actualizado: {} → {}", user_id, role.as_str());

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Rol actualizado exitosamente".to_string(),
        ))
    }
}
