//! HTTP adapter for a model-serving sidecar
//!
//! Talks to an external tagging service over a small JSON API: POST
//! `{base}/ner` with `{"text": ..., "model": ...}`, expecting
//! `{"spans": [{"text", "label", "start", "end"}, ...]}` back. Spans whose
//! label falls outside the fixed vocabulary are dropped with a debug log
//! rather than failing the whole extraction.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use scry_core::{ModelConfig, Result, ScryError};

use crate::{ModelSpan, NerModel};

pub struct RemoteNerModel {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct TagRequest<'a> {
    text: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct TagResponse {
    spans: Vec<TagSpan>,
}

#[derive(Deserialize)]
struct TagSpan {
    text: String,
    label: String,
    start: usize,
    end: usize,
}

impl RemoteNerModel {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.name.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

impl NerModel for RemoteNerModel {
    fn recognize(&self, text: &str) -> Result<Vec<ModelSpan>> {
        let url = format!("{}/ner", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&TagRequest {
                text,
                model: &self.model,
            })
            .send()
            .map_err(|e| ScryError::ModelError(format!("sidecar request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ScryError::ModelError(format!(
                "sidecar returned {}",
                response.status()
            )));
        }

        let body: TagResponse = response
            .json()
            .map_err(|e| ScryError::ModelError(format!("invalid sidecar response: {e}")))?;

        Ok(parse_spans(body.spans))
    }

    fn id(&self) -> &str {
        &self.model
    }
}

fn parse_spans(spans: Vec<TagSpan>) -> Vec<ModelSpan> {
    spans
        .into_iter()
        .filter_map(|span| match span.label.parse() {
            Ok(label) => Some(ModelSpan {
                text: span.text,
                label,
                start: span.start,
                end: span.end,
            }),
            Err(_) => {
                tracing::debug!(label = %span.label, "dropping span with unknown label");
                None
            }
        })
        .collect()
}
