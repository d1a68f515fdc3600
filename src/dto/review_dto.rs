//! DTOs de reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::review::{RatingSummary, Review};

/// Request para crear una review
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub vehicle_id: Uuid,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(min = 1))]
    pub comment: String,
}

/// Response de review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            vehicle_id: review.vehicle_id,
            user_name: review.user_name,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

/// Reviews de un vehículo con su resumen
#[derive(Debug, Serialize)]
pub struct VehicleReviewsResponse {
    pub summary: RatingSummary,
    pub reviews: Vec<ReviewResponse>,
}
