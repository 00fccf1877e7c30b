//! SemantIQ Dashboard Core
//!
//! The core module provides the data model, API client, and view logic for the
//! SemantIQ benchmark dashboard: run summaries and details, run-list filtering and
//! comparison selection, category-set reconciliation, and the route table shared
//! with the TUI shell.

pub mod api;
pub mod compare;
pub mod config;
pub mod filter;
pub mod models;
pub mod route;

pub use api::{ApiClient, ApiError};
pub use compare::Comparison;
pub use config::DashConfig;
pub use filter::{filter_runs, run_matches, DomainFilter, Selection, Toggle, MAX_COMPARE};
pub use models::{
    fmt_score, CategoryScore, Domain, DomainDetail, RunDetail, RunMetadata, RunStatus, RunSummary,
};
pub use route::Route;
