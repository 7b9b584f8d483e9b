// History cache - read-through cache with per-entry time-to-live
use crate::application::history_repository::{HistoricalContext, MaintenanceHistoryRepository};
use crate::domain::equipment::EquipmentType;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

type CacheKey = (EquipmentType, String);

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Option<HistoricalContext>,
    expires_at: Instant,
}

/// Constructed explicitly and shared through application state. Misses (including
/// "no history") are cached for `ttl` like hits.
#[derive(Clone)]
pub struct HistoryCache {
    repository: Arc<dyn MaintenanceHistoryRepository>,
    ttl: Duration,
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
}

impl HistoryCache {
    pub fn new(repository: Arc<dyn MaintenanceHistoryRepository>, ttl: Duration) -> Self {
        Self {
            repository,
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(
        &self,
        equipment_type: EquipmentType,
        failure_type: &str,
    ) -> anyhow::Result<Option<HistoricalContext>> {
        let key = (equipment_type, failure_type.to_string());

        if let Some(entry) = self.entries.read().await.get(&key) {
            if entry.expires_at > Instant::now() {
                tracing::debug!("History cache hit for {}/{}", equipment_type, failure_type);
                return Ok(entry.value.clone());
            }
        }

        tracing::debug!("History cache miss for {}/{}", equipment_type, failure_type);
        let value = self
            .repository
            .find_history(equipment_type, failure_type)
            .await?;

        self.entries.write().await.insert(
            key,
            CacheEntry {
                value: value.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );

        Ok(value)
    }

    pub async fn invalidate(&self, equipment_type: EquipmentType, failure_type: &str) {
        self.entries
            .write()
            .await
            .remove(&(equipment_type, failure_type.to_string()));
    }

    pub async fn invalidate_all(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MaintenanceHistoryRepository for CountingRepository {
        async fn find_history(
            &self,
            _equipment_type: EquipmentType,
            failure_type: &str,
        ) -> anyhow::Result<Option<HistoricalContext>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) as u32 + 1;
            if failure_type == "broken" {
                anyhow::bail!("history store unavailable");
            }
            Ok(Some(HistoricalContext {
                similar_events: n,
                avg_resolution_hours: 4.5,
                success_rate: 0.94,
                common_cause: failure_type.to_string(),
            }))
        }
    }

    fn cache(ttl_secs: u64) -> (Arc<CountingRepository>, HistoryCache) {
        let repo = Arc::new(CountingRepository::default());
        let cache = HistoryCache::new(repo.clone(), Duration::from_secs(ttl_secs));
        (repo, cache)
    }

    #[tokio::test(start_paused = true)]
    async fn test_reads_through_once_within_ttl() {
        let (repo, cache) = cache(60);

        let first = cache.get(EquipmentType::SolarWaterPump, "bearing_failure").await.unwrap();
        let second = cache.get(EquipmentType::SolarWaterPump, "bearing_failure").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_after_ttl() {
        let (repo, cache) = cache(60);

        cache.get(EquipmentType::TractorEngine, "overspeed").await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        let refreshed = cache.get(EquipmentType::TractorEngine, "overspeed").await.unwrap();

        assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
        assert_eq!(refreshed.unwrap().similar_events, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_forces_reload() {
        let (repo, cache) = cache(600);

        cache.get(EquipmentType::IrrigationSystem, "pressure_loss").await.unwrap();
        cache.get(EquipmentType::IrrigationSystem, "filter_clogged").await.unwrap();
        assert_eq!(cache.len().await, 2);

        cache.invalidate(EquipmentType::IrrigationSystem, "pressure_loss").await;
        assert_eq!(cache.len().await, 1);
        cache.get(EquipmentType::IrrigationSystem, "pressure_loss").await.unwrap();
        assert_eq!(repo.calls.load(Ordering::SeqCst), 3);

        cache.invalidate_all().await;
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repository_errors_are_not_cached() {
        let (repo, cache) = cache(600);

        assert!(cache.get(EquipmentType::SolarWaterPump, "broken").await.is_err());
        assert!(cache.get(EquipmentType::SolarWaterPump, "broken").await.is_err());
        assert_eq!(repo.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len().await, 0);
    }
}
