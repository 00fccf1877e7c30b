//! Data Model Module
//!
//! This module contains the unified run schema shared by all three benchmark
//! domains. All values are read-only projections of server responses; nothing
//! here is created or mutated by the client beyond deserialization.

use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Benchmark domain of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Semantic alignment & safety benchmarks for text models
    #[serde(rename = "SMF")]
    Smf,
    /// Human-AI collaboration benchmarks
    #[serde(rename = "HACS")]
    Hacs,
    /// Text-to-image rendering benchmarks
    #[serde(rename = "VISION")]
    Vision,
}

impl Domain {
    /// Wire/badge name of the domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Smf => "SMF",
            Domain::Hacs => "HACS",
            Domain::Vision => "VISION",
        }
    }

    /// Long label used in filter menus and domain cards
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Smf => "SMF (Text)",
            Domain::Hacs => "HACS (Human)",
            Domain::Vision => "Vision (T2I)",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored category within a run profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category_id: String,
    /// Score in [0, 1]; out-of-range values are displayed as-is, not rejected
    pub score: f64,
    pub label: String,
}

/// Terminal status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Failed,
    Running,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStatus::Completed => "Completed",
            RunStatus::Failed => "Failed",
            RunStatus::Running => "Running",
        };
        f.write_str(label)
    }
}

/// Provenance metadata attached to every run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub provider: String,
    pub model: String,
    /// RFC 3339 timestamp as sent by the server
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RunStatus>,
}

impl RunMetadata {
    /// Status label; a missing status reads as "Completed"
    pub fn status_label(&self) -> String {
        self.status.unwrap_or(RunStatus::Completed).to_string()
    }

    /// Calendar date of the run, falling back to the raw string when the
    /// timestamp does not parse
    pub fn date(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(ts) => ts.format("%Y-%m-%d").to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}

/// Summary of one benchmark run as returned by `GET /api/runs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub run_id: String,
    pub domain: Domain,
    /// Model name or "Human"
    pub subject: String,
    pub overall_score: f64,
    /// Ordered profile; `category_id` values are unique within one run
    pub categories: Vec<CategoryScore>,
    pub metadata: RunMetadata,
}

impl RunSummary {
    /// Run id truncated for list display
    pub fn short_id(&self) -> &str {
        let end = self
            .run_id
            .char_indices()
            .nth(16)
            .map(|(i, _)| i)
            .unwrap_or(self.run_id.len());
        &self.run_id[..end]
    }

    /// Score for one category of this run, if present
    pub fn score_for(&self, category_id: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category_id == category_id)
            .map(|c| c.score)
    }
}

/// Domain-specific portion of a run detail, keyed by the run's domain
#[derive(Debug, Clone, PartialEq)]
pub enum DomainDetail {
    Smf,
    Hacs {
        /// Per-module mean scores
        module_scores: BTreeMap<String, f64>,
    },
    Vision {
        /// Raw per-prompt scoring payloads
        prompt_scores: Option<serde_json::Value>,
        /// Fraction of prompts that breached a semantic constraint
        violation_rate: Option<f64>,
    },
}

/// Full detail of one benchmark run as returned by `GET /api/runs/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct RunDetail {
    pub summary: RunSummary,
    pub extra: DomainDetail,
}

impl RunDetail {
    pub fn run_id(&self) -> &str {
        &self.summary.run_id
    }

    pub fn domain(&self) -> Domain {
        self.summary.domain
    }

    pub fn subject(&self) -> &str {
        &self.summary.subject
    }

    pub fn categories(&self) -> &[CategoryScore] {
        &self.summary.categories
    }

    pub fn score_for(&self, category_id: &str) -> Option<f64> {
        self.summary.score_for(category_id)
    }
}

/// Render a score with the fixed 2-decimal display rounding
pub fn fmt_score(score: f64) -> String {
    format!("{:.2}", score)
}
