//! Estado compartido de la aplicación

use sqlx::PgPool;

use crate::cache::{new_vehicle_catalog_cache, VehicleCatalogCache};
use crate::config::environment::EnvironmentConfig;

/// Estado global que comparten todos los handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub vehicle_catalog: VehicleCatalogCache,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            vehicle_catalog: new_vehicle_catalog_cache(),
        }
    }
}
