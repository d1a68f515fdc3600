//! Controller de reviews
//!
//! Alta de reviews con truncado del comentario y listado por vehículo con
//! su resumen de ratings.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse, VehicleReviewsResponse};
use crate::repositories::review_repository::ReviewRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{truncate_text, MAX_REVIEW_LENGTH};

pub struct ReviewController {
    repository: ReviewRepository,
    vehicle_repository: VehicleRepository,
    user_repository: UserRepository,
}

impl ReviewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReviewRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            user_repository: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        request: CreateReviewRequest,
    ) -> Result<ApiResponse<ReviewResponse>, AppError> {
        request.validate()?;

        // El vehículo tiene que existir
        self.vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        // Comentarios largos se truncan, no se rechazan
        let comment = truncate_text(request.comment.trim(), MAX_REVIEW_LENGTH);

        let review = self
            .repository
            .create(
                request.vehicle_id,
                user_id,
                user.full_name,
                request.rating,
                comment,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ReviewResponse::from(review),
            "Review publicada exitosamente".to_string(),
        ))
    }

    /// Reviews de un vehículo con su promedio
    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
    ) -> Result<VehicleReviewsResponse, AppError> {
        let reviews = self.repository.find_by_vehicle(vehicle_id).await?;
        let summary = self.repository.rating_summary(vehicle_id).await?;

        Ok(VehicleReviewsResponse {
            summary,
            reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
        })
    }
}
