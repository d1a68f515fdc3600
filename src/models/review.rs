//! Modelo de Review
//!
//! Reviews de vehículos: rating 1-5 y comentario libre. Se crean una vez y
//! nunca se mutan; solo se usan para agregación de lectura.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review principal - mapea exactamente a la tabla reviews
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Resumen de ratings de un vehículo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub count: i64,
}

impl RatingSummary {
    pub fn empty() -> Self {
        Self {
            average_rating: 0.0,
            count: 0,
        }
    }

    /// Calcular el resumen a partir de los ratings, redondeado a 1 decimal
    pub fn from_ratings(ratings: &[i32]) -> Self {
        if ratings.is_empty() {
            return Self::empty();
        }
        let total: i64 = ratings.iter().map(|r| *r as i64).sum();
        let average = total as f64 / ratings.len() as f64;
        Self {
            average_rating: (average * 10.0).round() / 10.0,
            count: ratings.len() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_summary_rounds_to_one_decimal() {
        let summary = RatingSummary::from_ratings(&[5, 4, 4]);
        assert_eq!(summary.average_rating, 4.3);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_rating_summary_empty() {
        let summary = RatingSummary::from_ratings(&[]);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.count, 0);
    }
}
