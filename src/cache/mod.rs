//! Caché en memoria del proceso

pub mod snapshot;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::vehicle::Vehicle;
use snapshot::CachedSnapshot;

/// Snapshot compartido del catálogo de vehículos
pub type VehicleCatalogCache = Arc<RwLock<Option<CachedSnapshot<Vec<Vehicle>>>>>;

pub fn new_vehicle_catalog_cache() -> VehicleCatalogCache {
    Arc::new(RwLock::new(None))
}
