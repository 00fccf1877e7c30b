//! API Client Module
//!
//! This module contains the read-only client for the benchmark API. The backend
//! exposes exactly two endpoints: `GET {base}/runs` for summaries and
//! `GET {base}/runs/{id}` for one run's full detail. There is no retry, no
//! caching, and no timeout beyond the client defaults.

use std::collections::BTreeMap;

use futures::future::try_join_all;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::DashConfig;
use crate::models::{Domain, DomainDetail, RunDetail, RunSummary};

/// Characters escaped when a run id is embedded as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered 404 for a run detail lookup
    #[error("run not found: {0}")]
    NotFound(String),
    /// The server answered with a non-2xx status other than 404
    #[error("fetch failed: server returned {0}")]
    Status(u16),
    /// The request never completed
    #[error("fetch failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not a valid payload
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Run detail as it appears on the wire: a summary plus optional
/// domain-specific fields. Converted into the typed [`RunDetail`] at the
/// client boundary so render sites never see untagged optionals.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRunDetail {
    #[serde(flatten)]
    summary: RunSummary,
    #[serde(default)]
    module_scores: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    prompt_scores: Option<serde_json::Value>,
    #[serde(default)]
    violation_rate: Option<f64>,
}

impl RawRunDetail {
    /// Build the discriminated detail keyed by the run's domain. Fields that
    /// do not belong to the domain are dropped here rather than trusted
    /// downstream.
    fn into_detail(self) -> RunDetail {
        let extra = match self.summary.domain {
            Domain::Smf => DomainDetail::Smf,
            Domain::Hacs => DomainDetail::Hacs {
                module_scores: self.module_scores.unwrap_or_default(),
            },
            Domain::Vision => DomainDetail::Vision {
                prompt_scores: self.prompt_scores,
                violation_rate: self.violation_rate,
            },
        };
        RunDetail {
            summary: self.summary,
            extra,
        }
    }
}

/// Client for the benchmark run API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying HTTP client
    client: Client,
    /// Base URL including the `/api` prefix, no trailing slash
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Create a client from the dashboard configuration
    pub fn from_config(config: &DashConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// Fetch all run summaries
    pub async fn list_runs(&self) -> Result<Vec<RunSummary>, ApiError> {
        let url = format!("{}/runs", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch one run's full detail
    pub async fn run_detail(&self, run_id: &str) -> Result<RunDetail, ApiError> {
        let url = format!(
            "{}/runs/{}",
            self.base_url,
            utf8_percent_encode(run_id, PATH_SEGMENT)
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(run_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let body = response.bytes().await?;
        let raw: RawRunDetail = serde_json::from_slice(&body)?;
        Ok(raw.into_detail())
    }

    /// Fetch several run details concurrently. Results follow the input id
    /// order regardless of arrival order; any single failure fails the whole
    /// call with no partial result.
    pub async fn run_details(&self, run_ids: &[String]) -> Result<Vec<RunDetail>, ApiError> {
        try_join_all(run_ids.iter().map(|id| self.run_detail(id))).await
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
