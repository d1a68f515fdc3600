//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del catálogo de alquiler.
//! El vehículo solo se muta a través de la superficie CRUD administrativa.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de disponibilidad del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

impl VehicleStatus {
    pub fn from_store(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "rented" => VehicleStatus::Rented,
            "maintenance" => VehicleStatus::Maintenance,
            _ => VehicleStatus::Available,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
            VehicleStatus::Maintenance => "maintenance",
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
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

impl Vehicle {
    pub fn availability(&self) -> VehicleStatus {
        VehicleStatus::from_store(&self.status)
    }
}
