use axum::{
    extract::{Path, State},
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::review_controller::ReviewController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse, VehicleReviewsResponse};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_review_router(state: AppState) -> Router<AppState> {
    // Leer reviews es público; publicar requiere sesión
    let protected = Router::new()
        .route("/", post(create_review))
        .route_layer(from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/vehicle/:vehicle_id", get(list_vehicle_reviews))
        .merge(protected)
}

async fn create_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;
    Ok(Json(response))
}

async fn list_vehicle_reviews(
    State(state): State<AppState>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<VehicleReviewsResponse>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list_by_vehicle(vehicle_id).await?;
    Ok(Json(response))
}
