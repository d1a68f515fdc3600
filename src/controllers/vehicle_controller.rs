//! Controller de vehículos
//!
//! El catálogo público se sirve desde un snapshot cacheado del proceso y los
//! filtros se aplican en memoria sobre ese snapshot. Las mutaciones
//! administrativas escriben en la base y descartan el snapshot.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cache::snapshot::CachedSnapshot;
use crate::cache::VehicleCatalogCache;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleDetailResponse, VehicleQuery,
    VehicleResponse,
};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::repositories::review_repository::ReviewRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
    review_repository: ReviewRepository,
    catalog_cache: VehicleCatalogCache,
    cache_ttl_secs: i64,
}

impl VehicleController {
    pub fn new(pool: PgPool, catalog_cache: VehicleCatalogCache, cache_ttl_secs: i64) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            review_repository: ReviewRepository::new(pool),
            catalog_cache,
            cache_ttl_secs,
        }
    }

    /// Catálogo público con filtros, servido desde el snapshot
    pub async fn list(&self, query: VehicleQuery) -> Result<Vec<VehicleResponse>, AppError> {
        let catalog = self.catalog_snapshot().await?;
        let filtered = apply_filters(&catalog, &query);

        Ok(filtered.into_iter().map(VehicleResponse::from).collect())
    }

    /// Detalle de vehículo con su resumen de ratings, siempre fresco
    pub async fn get(&self, id: Uuid) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let rating = self.review_repository.rating_summary(id).await?;

        Ok(VehicleDetailResponse {
            vehicle: VehicleResponse::from(vehicle),
            rating,
        })
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let status = request
            .status
            .as_deref()
            .map(VehicleStatus::from_store)
            .unwrap_or(VehicleStatus::Available);

        let vehicle = self
            .repository
            .create(
                request.vehicle_name,
                request.vehicle_type,
                request.price_per_day,
                request.seats,
                request.features,
                request.image_url,
                status,
            )
            .await?;
        self.invalidate_catalog().await;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // El derive no cubre el doble Option de image_url
        if let Some(Some(url)) = &request.image_url {
            if !validator::validate_url(url.as_str()) {
                return Err(AppError::BadRequest("image_url inválida".to_string()));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.vehicle_name,
                request.vehicle_type,
                request.price_per_day,
                request.seats,
                request.features,
                request.image_url,
                request.status.as_deref().map(VehicleStatus::from_store),
            )
            .await?;
        self.invalidate_catalog().await;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, AppError> {
        self.repository.delete(id).await?;
        self.invalidate_catalog().await;

        Ok(ApiResponse::success_with_message(
            (),
            "Vehículo eliminado exitosamente".to_string(),
        ))
    }

    /// Snapshot del catálogo, refrescado solo si venció su TTL
    async fn catalog_snapshot(&self) -> Result<Vec<Vehicle>, AppError> {
        let now = Utc::now();

        {
            let guard = self.catalog_cache.read().await;
            if let Some(snapshot) = guard.as_ref() {
                if !snapshot.is_stale(self.cache_ttl_secs, now) {
                    return Ok(snapshot.data.clone());
                }
            }
        }

        let vehicles = self.repository.find_all().await?;
        tracing::debug!("🔄 Catálogo de vehículos refrescado: {} items", vehicles.len());

        let mut guard = self.catalog_cache.write().await;
        *guard = Some(CachedSnapshot::new(vehicles.clone()));

        Ok(vehicles)
    }

    async fn invalidate_catalog(&self) {
        let mut guard = self.catalog_cache.write().await;
        *guard = None;
    }
}

/// Filtrado en memoria del catálogo; todos los filtros son conjuntivos
pub fn apply_filters(vehicles: &[Vehicle], query: &VehicleQuery) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| {
            if let Some(ref vehicle_type) = query.vehicle_type {
                if !v.vehicle_type.eq_ignore_ascii_case(vehicle_type) {
                    return false;
                }
            }
            if let Some(max_price) = query.max_price {
                if v.price_per_day > max_price {
                    return false;
                }
            }
            if let Some(ref status) = query.status {
                if !v.status.eq_ignore_ascii_case(status) {
                    return false;
                }
            }
            if let Some(ref search) = query.search {
                let term = search.to_lowercase();
                if !v.vehicle_name.to_lowercase().contains(&term)
                    && !v.vehicle_type.to_lowercase().contains(&term)
                {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn vehicle(name: &str, vehicle_type: &str, price: i64, status: &str) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            vehicle_name: name.to_string(),
            vehicle_type: vehicle_type.to_string(),
            price_per_day: Decimal::from(price),
            seats: 5,
            features: vec![],
            image_url: None,
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Vehicle> {
        vec![
            vehicle("Toyota Corolla", "sedan", 45, "available"),
            vehicle("Ford Explorer", "suv", 80, "available"),
            vehicle("Honda Civic", "sedan", 50, "rented"),
            vehicle("Tesla Model 3", "sedan", 120, "available"),
        ]
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let result = apply_filters(&catalog(), &VehicleQuery::default());
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_filter_by_type_is_case_insensitive() {
        let query = VehicleQuery {
            vehicle_type: Some("SEDAN".to_string()),
            ..Default::default()
        };
        let result = apply_filters(&catalog(), &query);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|v| v.vehicle_type == "sedan"));
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let query = VehicleQuery {
            max_price: Some(Decimal::from(50)),
            ..Default::default()
        };
        let result = apply_filters(&catalog(), &query);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_search_matches_name_or_type() {
        let query = VehicleQuery {
            search: Some("suv".to_string()),
            ..Default::default()
        };
        let result = apply_filters(&catalog(), &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].vehicle_name, "Ford Explorer");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let query = VehicleQuery {
            vehicle_type: Some("sedan".to_string()),
            max_price: Some(Decimal::from(60)),
            status: Some("available".to_string()),
            search: None,
        };
        let result = apply_filters(&catalog(), &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].vehicle_name, "Toyota Corolla");
    }
}
