//! Scry Core - Domain models and shared types
//!
//! This crate defines the core abstractions used throughout the scry system:
//! - The fixed entity label vocabulary (statistical + pattern labels)
//! - Extraction result models returned over the wire
//! - Common error types
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, LoggingConfig, ModelConfig, ModelProvider, ServerConfig};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use utoipa::ToSchema;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for scry operations
#[derive(Error, Debug)]
pub enum ScryError {
    /// The statistical model capability failed to initialize. Non-fatal:
    /// extraction degrades to the documented no-model result instead of
    /// propagating this variant.
    #[error("NER model not loaded")]
    ModelUnavailable,

    #[error("Model error: {0}")]
    ModelError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScryError>;

// ============================================================================
// Label Vocabulary
// ============================================================================

/// Entity labels recognized by the system.
///
/// The closed union of the statistical model's eighteen categories and the
/// five custom pattern labels. The vocabulary is static: it does not depend
/// on the current text or on whether a model is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    // Statistical model categories
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,

    // Custom pattern labels
    Email,
    Phone,
    Url,
    IpAddress,
    CryptoAddress,
}

impl EntityLabel {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Norp => "NORP",
            Self::Fac => "FAC",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Product => "PRODUCT",
            Self::Event => "EVENT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Law => "LAW",
            Self::Language => "LANGUAGE",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Percent => "PERCENT",
            Self::Money => "MONEY",
            Self::Quantity => "QUANTITY",
            Self::Ordinal => "ORDINAL",
            Self::Cardinal => "CARDINAL",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Url => "URL",
            Self::IpAddress => "IP_ADDRESS",
            Self::CryptoAddress => "CRYPTO_ADDRESS",
        }
    }

    /// True for labels produced by the pattern extractor rather than the
    /// statistical model.
    pub fn is_pattern(&self) -> bool {
        matches!(
            self,
            Self::Email | Self::Phone | Self::Url | Self::IpAddress | Self::CryptoAddress
        )
    }

    /// The full fixed vocabulary, statistical categories first, then the
    /// custom pattern labels.
    pub fn all() -> &'static [EntityLabel] {
        &[
            Self::Person,
            Self::Norp,
            Self::Fac,
            Self::Org,
            Self::Gpe,
            Self::Loc,
            Self::Product,
            Self::Event,
            Self::WorkOfArt,
            Self::Law,
            Self::Language,
            Self::Date,
            Self::Time,
            Self::Percent,
            Self::Money,
            Self::Quantity,
            Self::Ordinal,
            Self::Cardinal,
            Self::Email,
            Self::Phone,
            Self::Url,
            Self::IpAddress,
            Self::CryptoAddress,
        ]
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityLabel {
    type Err = ScryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .find(|label| label.as_str() == s)
            .copied()
            .ok_or_else(|| ScryError::InvalidInput(format!("unknown entity label: {s}")))
    }
}

// ============================================================================
// Extraction Models
// ============================================================================

/// Sentinel model identifier reported when no model is loaded
pub const MODEL_NONE: &str = "none";

/// One recognized span in the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Entity {
    /// The exact substring matched, not normalized or trimmed
    pub text: String,

    /// Category tag
    pub label: EntityLabel,

    /// Byte offset of the span start in the source text, 0-indexed
    pub start: usize,

    /// Byte offset one past the span end, so `text == &source[start..end]`
    pub end: usize,

    /// Fixed confidence constant for the producing extractor, in [0, 1]
    pub confidence: f32,
}

/// The full response for one extracted text.
///
/// Transient: constructed fresh per call, never persisted or mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExtractionResult {
    /// The original input, unmodified
    pub text: String,

    /// Recognized entities: model entities first in emission order, then
    /// pattern entities in fixed pattern-type order. Never deduplicated.
    pub entities: Vec<Entity>,

    /// Occurrence count per label, covering only labels that appear
    #[schema(value_type = HashMap<String, usize>)]
    pub entity_counts: HashMap<EntityLabel, usize>,

    /// Identifier of the statistical model used, or `"none"`
    pub model: String,

    /// Present only when extraction degraded (model unavailable) or the
    /// input was rejected by the batch boundary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// The degraded result returned when the model capability is absent.
    /// Pattern extraction is skipped on this path by design.
    pub fn degraded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Vec::new(),
            entity_counts: HashMap::new(),
            model: MODEL_NONE.to_string(),
            error: Some(ScryError::ModelUnavailable.to_string()),
        }
    }

    /// The fixed placeholder substituted for an invalid batch entry
    pub fn invalid_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Vec::new(),
            entity_counts: HashMap::new(),
            model: MODEL_NONE.to_string(),
            error: Some("Invalid text".to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
