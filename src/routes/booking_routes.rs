use axum::{
    extract::{Path, State},
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    BookingResponse, CreateBookingRequest, MyBookingsResponse, UpdateBookingStatusRequest,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/", get(list_all_bookings))
        .route("/:id/status", patch(update_booking_status))
        .route_layer(axum::middleware::from_fn(admin_only_middleware));

    Router::new()
        .route("/", post(create_booking))
        .route("/me", get(my_bookings))
        .route("/:id/cancel", post(cancel_booking))
        .nest("/admin", admin_routes)
        .route_layer(from_fn_with_state(state, auth_middleware))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;
    Ok(Json(response))
}

async fn my_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<MyBookingsResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.my_bookings(user.user_id).await?;
    Ok(Json(response))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.cancel(id, user.user_id).await?;
    Ok(Json(response))
}

async fn list_all_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}
