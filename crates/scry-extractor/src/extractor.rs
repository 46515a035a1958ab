//! Combined extraction pipeline
//!
//! Runs the statistical model first, then the pattern matchers, and folds
//! both into one [`ExtractionResult`]. If the model capability is absent the
//! whole extraction degrades: no entities at all, including pattern matches.

use std::collections::HashMap;
use std::sync::Arc;

use scry_core::{Entity, EntityLabel, ExtractionResult, Result, MODEL_NONE};

use crate::patterns::PatternExtractor;
use crate::NerModel;

/// Confidence assigned to every model-produced entity. The model capability
/// reports spans without scores, so a single constant stands in.
pub const MODEL_CONFIDENCE: f32 = 0.9;

/// The combined extraction pipeline.
///
/// Holds an optional handle to the statistical model and the pattern
/// matchers. Immutable after construction and safe to share across request
/// handlers behind an `Arc`.
pub struct EntityExtractor {
    model: Option<Arc<dyn NerModel>>,
    patterns: PatternExtractor,
}

impl EntityExtractor {
    pub fn new(model: Option<Arc<dyn NerModel>>) -> Self {
        Self {
            model,
            patterns: PatternExtractor::new(),
        }
    }

    /// Whether the statistical model capability is loaded
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Identifier of the loaded model, or the `"none"` sentinel
    pub fn model_id(&self) -> &str {
        self.model.as_deref().map_or(MODEL_NONE, |m| m.id())
    }

    /// Extract all entities from `text`.
    ///
    /// With no model loaded this returns the degraded result: empty entity
    /// list, empty counts, model `"none"` and an explanatory error string.
    /// Pattern matching is skipped on that path too. A loaded model that
    /// fails mid-call is a real error and propagates.
    pub fn extract(&self, text: &str) -> Result<ExtractionResult> {
        let Some(model) = &self.model else {
            return Ok(ExtractionResult::degraded(text));
        };

        let mut entities: Vec<Entity> = model
            .recognize(text)?
            .into_iter()
            .map(|span| Entity {
                text: span.text,
                label: span.label,
                start: span.start,
                end: span.end,
                confidence: MODEL_CONFIDENCE,
            })
            .collect();

        entities.extend(self.patterns.extract(text));

        let mut entity_counts: HashMap<EntityLabel, usize> = HashMap::new();
        for entity in &entities {
            *entity_counts.entry(entity.label).or_insert(0) += 1;
        }

        Ok(ExtractionResult {
            text: text.to_string(),
            entities,
            entity_counts,
            model: model.id().to_string(),
            error: None,
        })
    }

    /// Run only the pattern matchers, bypassing the model and the degraded
    /// path entirely. Library-level capability, not exposed over HTTP.
    pub fn extract_patterns(&self, text: &str) -> Vec<Entity> {
        self.patterns.extract(text)
    }
}
