//! Scry Extractor - OSINT entity extraction engine
//!
//! Combines two independent sources of entities:
//! - A pretrained statistical NER model, consumed as an opaque capability
//!   through the [`NerModel`] trait
//! - Deterministic pattern matchers for OSINT identifiers
//!   ([`PatternExtractor`])
//!
//! The [`EntityExtractor`] orchestrates both into one result. The two
//! sources are never merged or deduplicated against each other; downstream
//! consumers apply overlap resolution themselves if they need it.

use std::sync::Arc;

use scry_core::{EntityLabel, ModelConfig, ModelProvider, Result};

pub mod extractor;
pub mod patterns;
pub mod remote;

pub use extractor::EntityExtractor;
pub use patterns::PatternExtractor;
pub use remote::RemoteNerModel;

/// A span emitted by the statistical model capability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// The consumed statistical entity-recognition capability.
///
/// Implementations are immutable after construction and safe for concurrent
/// read access; the handle is initialized once at process start and injected
/// into the [`EntityExtractor`]. Absence of the capability is a first-class
/// state handled by the extractor, not by implementors.
pub trait NerModel: Send + Sync {
    /// Recognize entity spans in `text`, in the model's own emission order.
    /// Offsets are byte offsets into `text`.
    fn recognize(&self, text: &str) -> Result<Vec<ModelSpan>>;

    /// Model identifier reported in extraction results
    fn id(&self) -> &str;
}

/// Build the configured model capability, if any.
///
/// Returns `None` for the `none` provider; every extraction then takes the
/// documented degraded path.
pub fn build_model(config: &ModelConfig) -> Option<Arc<dyn NerModel>> {
    match config.provider {
        ModelProvider::Disabled => None,
        ModelProvider::Remote => Some(Arc::new(RemoteNerModel::from_config(config))),
    }
}
