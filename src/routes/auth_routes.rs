use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    ApiResponse, AuthResponse, LoginRequest, RegisterRequest, UserResponse,
};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router(state: AppState, rate_limit: RateLimitState) -> Router<AppState> {
    // Registro y login llevan un limitador estricto con contadores propios
    let public = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route_layer(from_fn_with_state(rate_limit.strict(), rate_limit_middleware));

    let protected = Router::new()
        .route("/me", get(me))
        .route("/me", delete(delete_account))
        .route_layer(from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.me(user.user_id).await?;
    Ok(Json(response))
}

async fn delete_account(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), &state.config);
    let response = controller.delete_account(user.user_id).await?;
    Ok(Json(response))
}
