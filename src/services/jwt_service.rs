//! Servicio de JWT
//!
//! Generación y validación de tokens de acceso. El token solo transporta el
//! id del usuario y su rol; el middleware vuelve a cargar el usuario de la
//! base para verificar que sigue existiendo.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::utils::errors::AppError;

/// Claims del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

pub struct JwtService {
    secret: String,
    expiration_secs: u64,
}

impl JwtService {
    pub fn new(secret: String, expiration_secs: u64) -> Self {
        Self {
            secret,
            expiration_secs,
        }
    }

    /// Generar un token de acceso para un usuario
    pub fn generate_token(&self, user_id: Uuid, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.expiration_secs as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )
        .map_err(|e| AppError::Jwt(format!("Error generando JWT: {}", e)))
    }

    /// Validar un token y devolver sus claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_validate_token() {
        let jwt_service = JwtService::new("test_secret".to_string(), 3600);
        let user_id = Uuid::new_v4();

        let token = jwt_service
            .generate_token(user_id, UserRole::Admin)
            .unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let jwt_service = JwtService::new("test_secret".to_string(), 3600);
        assert!(jwt_service.validate_token("not-a-token").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let jwt_service = JwtService::new("test_secret".to_string(), 3600);
        let other_service = JwtService::new("other_secret".to_string(), 3600);

        let token = jwt_service
            .generate_token(Uuid::new_v4(), UserRole::User)
            .unwrap();
        assert!(other_service.validate_token(&token).is_err());
    }
}
