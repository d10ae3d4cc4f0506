//! Application state management
//!
//! Shared resources handed to every request handler through Axum's state
//! extraction. All fields are cheap to clone.

use crate::config::AppConfig;
use crate::repositories::{KeyValueStore, PlanCatalog};
use crate::services::{EventBus, UserLocks};
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Profile and progress storage
    pub store: Arc<dyn KeyValueStore>,
    pub config: Arc<AppConfig>,
    /// Seeded plans and content, read-only after startup
    pub catalog: Arc<PlanCatalog>,
    pub events: EventBus,
    pub locks: UserLocks,
    /// Set when a Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: AppConfig) -> Self {
        let events = EventBus::new(config.events.channel_capacity);

        Self {
            store,
            catalog: Arc::new(PlanCatalog::seeded(Utc::now())),
            config: Arc::new(config),
            events,
            locks: UserLocks::new(),
            metrics: None,
        }
    }

    /// Attach the handle used to render `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    #[inline]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    #[inline]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    #[inline]
    pub fn locks(&self) -> &UserLocks {
        &self.locks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    #[test]
    fn test_state_clone_shares_resources() {
        let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.catalog, &cloned.catalog));
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert_eq!(cloned.store().name(), "memory");
        assert!(cloned.metrics.is_none());
    }
}
