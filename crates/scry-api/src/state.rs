//! Application state management

use scry_core::AppConfig;
use scry_extractor::{EntityExtractor, NerModel};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// The extraction pipeline, shared by all requests
    pub extractor: Arc<EntityExtractor>,
}

impl AppState {
    /// Create new application state with config and an optional model handle
    pub fn new(config: AppConfig, model: Option<Arc<dyn NerModel>>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            extractor: Arc::new(EntityExtractor::new(model)),
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the statistical model is loaded
    pub fn model_loaded(&self) -> bool {
        self.extractor.has_model()
    }

    /// Identifier of the loaded model, or `"none"`
    pub fn model_id(&self) -> &str {
        self.extractor.model_id()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), None)
    }
}
