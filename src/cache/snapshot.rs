//! Snapshot cacheado con frescura observable
//!
//! En vez de invalidar entradas por clave, el catálogo se cachea como un
//! snapshot completo con su timestamp de captura. El lector decide si el
//! snapshot sigue siendo utilizable comparando la edad contra un TTL.

use chrono::{DateTime, Duration, Utc};

/// Un valor cacheado junto con el momento en que se capturó
#[derive(Debug, Clone)]
pub struct CachedSnapshot<T> {
    pub data: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CachedSnapshot<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            fetched_at: Utc::now(),
        }
    }

    /// Edad del snapshot en segundos
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }

    /// ¿El snapshot superó su TTL?
    pub fn is_stale(&self, ttl_secs: i64, now: DateTime<Utc>) -> bool {
        self.age(now) >= Duration::seconds(ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_snapshot_is_not_stale() {
        let snapshot = CachedSnapshot::new(vec![1, 2, 3]);
        let now = snapshot.fetched_at + Duration::seconds(10);
        assert!(!snapshot.is_stale(60, now));
    }

    #[test]
    fn test_snapshot_past_ttl_is_stale() {
        let snapshot = CachedSnapshot::new("catalogo");
        let now = snapshot.fetched_at + Duration::seconds(61);
        assert!(snapshot.is_stale(60, now));
    }

    #[test]
    fn test_snapshot_exactly_at_ttl_is_stale() {
        let snapshot = CachedSnapshot::new(());
        let now = snapshot.fetched_at + Duration::seconds(60);
        assert!(snapshot.is_stale(60, now));
    }

    #[test]
    fn test_age_is_measured_from_capture() {
        let snapshot = CachedSnapshot::new(0u8);
        let now = snapshot.fetched_at + Duration::seconds(42);
        assert_eq!(snapshot.age(now), Duration::seconds(42));
    }
}
