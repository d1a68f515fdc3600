//! Controller de autenticación y cuentas
//!
//! Registro con hash bcrypt, login con emisión de JWT, perfil propio y
//! borrado de cuenta en cascada.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{
    ApiResponse, AuthResponse, LoginRequest, RegisterRequest, UserResponse,
};
use crate::repositories::user_repository::UserRepository;
use crate::services::jwt_service::JwtService;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::password_feedback;

pub struct AuthController {
    repository: UserRepository,
    jwt_service: JwtService,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_service: JwtService::new(config.jwt_secret.clone(), config.jwt_expiration),
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        let feedback = password_feedback(&request.password);
        if !feedback.valid {
            return Err(AppError::BadRequest(feedback.message.to_string()));
        }

        let email = request.email.trim().to_lowercase();
        if self.repository.email_exists(&email).await? {
            return Err(conflict_error("User", "email", &email));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;

        let user = self
            .repository
            .create(request.full_name.trim().to_string(), email, password_hash)
            .await?;

        tracing::info!("✅ Usuario registrado: {}", user.email);

        let token = self.jwt_service.generate_token(user.id, user.user_role())?;

        Ok(ApiResponse::success_with_message(
            AuthResponse {
                token,
                user: UserResponse::from(user),
            },
            "Cuenta creada exitosamente".to_string(),
        ))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();

        // Mismo error para email inexistente y password incorrecta
        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let password_ok = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !password_ok {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = self.jwt_service.generate_token(user.id, user.user_role())?;

        Ok(ApiResponse::success(AuthResponse {
            token,
            user: UserResponse::from(user),
        }))
    }

    /// Perfil del usuario autenticado
    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Borrado de la propia cuenta con todos sus datos
    pub async fn delete_account(&self, user_id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete_account(user_id).await?;
        tracing::info!("✅ Cuenta eliminada: {}", user_id);

        Ok(ApiResponse::success_with_message(
            (),
            "Cuenta eliminada exitosamente".to_string(),
        ))
    }
}
