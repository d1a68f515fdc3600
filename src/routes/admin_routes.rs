use axum::{
    extract::{Path, State},
    middleware::from_fn_with_state,
    routing::{get, patch},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{AdminReportResponse, UpdateUserRoleRequest};
use crate::dto::auth_dto::{ApiResponse, UserResponse};
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/report", get(admin_report))
        .route("/users", get(list_users))
        .route("/users/:id/role", patch(update_user_role))
        .route_layer(axum::middleware::from_fn(admin_only_middleware))
        .route_layer(from_fn_with_state(state, auth_middleware))
}

async fn admin_report(
    State(state): State<AppState>,
) -> Result<Json<AdminReportResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.report().await?;
    Ok(Json(response))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.list_users().await?;
    Ok(Json(response))
}

async fn update_user_role(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller
        .update_user_role(admin.user_id, id, request)
        .await?;
    Ok(Json(response))
}
