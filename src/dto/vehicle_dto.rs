//! DTOs de vehículos

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::review::RatingSummary;
use crate::models::vehicle::Vehicle;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub vehicle_name: String,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: String,

    pub price_per_day: Decimal,

    #[validate(range(min = 1, max = 20))]
    pub seats: i32,

    #[serde(default)]
    pub features: Vec<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub status: Option<String>,
}

/// Distinguir campo ausente (no tocar) de `null` explícito (limpiar)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub vehicle_name: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub vehicle_type: Option<String>,

    pub price_per_day: Option<Decimal>,

    #[validate(range(min = 1, max = 20))]
    pub seats: Option<i32>,

    pub features: Option<Vec<String>>,

    /// Ausente: conservar la imagen actual. `null`: borrarla.
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,

    pub status: Option<String>,
}

/// Filtros del catálogo público (query string)
#[derive(Debug, Default, Deserialize)]
pub struct VehicleQuery {
    pub vehicle_type: Option<String>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
    pub status: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub price_per_day: Decimal,
    pub seats: i32,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vehicle_name: vehicle.vehicle_name,
            vehicle_type: vehicle.vehicle_type,
            price_per_day: vehicle.price_per_day,
            seats: vehicle.seats,
            features: vehicle.features,
            image_url: vehicle.image_url,
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}

/// Detalle de vehículo con su resumen de ratings
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    #[serde(flatten)]
    pub vehicle: VehicleResponse,
    pub rating: RatingSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_absent_image_keeps_current() {
        let request: UpdateVehicleRequest =
            serde_json::from_str(r#"{ "seats": 4 }"#).unwrap();
        assert_eq!(request.image_url, None);
    }

    #[test]
    fn test_update_request_null_image_clears() {
        let request: UpdateVehicleRequest =
            serde_json::from_str(r#"{ "image_url": null }"#).unwrap();
        assert_eq!(request.image_url, Some(None));
    }

    #[test]
    fn test_update_request_image_value_replaces() {
        let request: UpdateVehicleRequest =
            serde_json::from_str(r#"{ "image_url": "https://cdn.rentacar.test/car.jpg" }"#)
                .unwrap();
        assert_eq!(
            request.image_url,
            Some(Some("https://cdn.rentacar.test/car.jpg".to_string()))
        );
    }
}
