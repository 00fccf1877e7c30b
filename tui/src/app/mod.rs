//! Dashboard App Module
//!
//! This module contains the application state: one struct per view, the route
//! currently shown, and the fetch lifecycle. Every navigation bumps a
//! generation counter; fetch results are tagged with the generation they were
//! spawned under and dropped when they arrive after a later navigation, so a
//! view never renders data from a request it no longer owns.

pub mod key_handlers;

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tracing::{debug, error};

use semantiq_dash_core::{
    filter_runs, ApiClient, ApiError, Comparison, DomainFilter, Route, RunDetail, RunSummary,
    Selection,
};

use crate::app::key_handlers::{
    handle_about_keys, handle_compare_keys, handle_detail_keys, handle_home_keys, handle_runs_keys,
};

/// Blocking notice raised when a fourth comparison run is selected
pub const COMPARE_LIMIT_NOTICE: &str = "You can compare up to 3 runs at a time.";

/// Sender half of the fetch-outcome channel
pub type FetchTx = mpsc::UnboundedSender<FetchEnvelope>;

/// Load state of one view's data
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// The server answered 404 for this lookup
    NotFound,
    /// Generic terminal failure; the message is user-visible
    Failed(String),
}

/// Outcome of one spawned fetch, tagged with the generation it belongs to
#[derive(Debug)]
pub struct FetchEnvelope {
    pub generation: u64,
    pub payload: FetchPayload,
}

/// Payload of one fetch outcome
#[derive(Debug)]
pub enum FetchPayload {
    Runs(Result<Vec<RunSummary>, ApiError>),
    Detail(Result<RunDetail, ApiError>),
    Compare(Result<Vec<RunDetail>, ApiError>),
}

/// State of the run list view
#[derive(Debug)]
pub struct RunsView {
    pub load: LoadState<Vec<RunSummary>>,
    pub search: String,
    /// Keystrokes go to the search box while set
    pub search_mode: bool,
    pub filter: DomainFilter,
    pub selection: Selection,
    /// Cursor position within the visible (filtered) rows
    pub cursor: usize,
}

impl RunsView {
    fn new() -> Self {
        Self {
            load: LoadState::Loading,
            search: String::new(),
            search_mode: false,
            filter: DomainFilter::All,
            selection: Selection::new(),
            cursor: 0,
        }
    }

    /// All fetched runs, or an empty slice while not loaded
    pub fn runs(&self) -> &[RunSummary] {
        match &self.load {
            LoadState::Ready(runs) => runs,
            _ => &[],
        }
    }

    /// Indices of the runs passing the current filter and search term
    pub fn visible(&self) -> Vec<usize> {
        filter_runs(self.runs(), self.filter, &self.search)
    }

    /// Run under the cursor, if any row is visible
    pub fn run_under_cursor(&self) -> Option<&RunSummary> {
        let visible = self.visible();
        visible.get(self.cursor).map(|idx| &self.runs()[*idx])
    }

    /// Keep the cursor inside the visible rows after a filter change
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

/// State of the run detail view
#[derive(Debug)]
pub struct DetailView {
    pub run_id: String,
    pub load: LoadState<RunDetail>,
}

/// State of the comparison view
#[derive(Debug)]
pub struct CompareView {
    /// Requested ids in route order
    pub ids: Vec<String>,
    pub load: LoadState<Comparison>,
}

/// The dashboard application
pub struct DashApp {
    /// Shared API client
    client: Arc<ApiClient>,
    /// Route currently shown
    pub route: Route,
    pub runs: RunsView,
    pub detail: Option<DetailView>,
    pub compare: Option<CompareView>,
    /// Blocking notice; swallows all input until dismissed
    pub notice: Option<String>,
    /// Bumped on every navigation; stale fetch results are dropped
    generation: u64,
    /// Application title
    pub title: String,
}

impl DashApp {
    /// Create a new dashboard application showing the landing view
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            route: Route::Home,
            runs: RunsView::new(),
            detail: None,
            compare: None,
            notice: None,
            generation: 0,
            title: "SemantIQ — Multimodal Benchmark Dashboard".to_string(),
        }
    }

    /// Navigate to a route. View state for the target is reset and its fetch
    /// (if any) is spawned; results of earlier fetches become stale.
    pub fn navigate(&mut self, route: Route, tx: &FetchTx) {
        self.generation += 1;
        debug!("navigate to {} (generation {})", route, self.generation);

        match &route {
            Route::Runs => {
                self.runs = RunsView::new();
                let client = Arc::clone(&self.client);
                let generation = self.generation;
                let tx = tx.clone();
                tokio::spawn(async move {
                    let payload = FetchPayload::Runs(client.list_runs().await);
                    let _ = tx.send(FetchEnvelope {
                        generation,
                        payload,
                    });
                });
            }
            Route::RunDetail(run_id) => {
                self.detail = Some(DetailView {
                    run_id: run_id.clone(),
                    load: LoadState::Loading,
                });
                let client = Arc::clone(&self.client);
                let generation = self.generation;
                let run_id = run_id.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let payload = FetchPayload::Detail(client.run_detail(&run_id).await);
                    let _ = tx.send(FetchEnvelope {
                        generation,
                        payload,
                    });
                });
            }
            Route::Compare { ids } => {
                if ids.is_empty() {
                    // Empty-state view; no fetch attempted.
                    self.compare = Some(CompareView {
                        ids: Vec::new(),
                        load: LoadState::Ready(Comparison::build(Vec::new())),
                    });
                } else {
                    self.compare = Some(CompareView {
                        ids: ids.clone(),
                        load: LoadState::Loading,
                    });
                    let client = Arc::clone(&self.client);
                    let generation = self.generation;
                    let ids = ids.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let payload = FetchPayload::Compare(client.run_details(&ids).await);
                        let _ = tx.send(FetchEnvelope {
                            generation,
                            payload,
                        });
                    });
                }
            }
            Route::Home | Route::About => {}
        }

        self.route = route;
    }

    /// Apply a fetch outcome, discarding it when a later navigation has made
    /// it stale
    pub fn apply_fetch(&mut self, envelope: FetchEnvelope) {
        if envelope.generation != self.generation {
            debug!(
                "dropping stale fetch result (generation {} != {})",
                envelope.generation, self.generation
            );
            return;
        }

        match envelope.payload {
            FetchPayload::Runs(Ok(runs)) => {
                self.runs.load = LoadState::Ready(runs);
                self.runs.cursor = 0;
            }
            FetchPayload::Runs(Err(err)) => {
                error!("failed to fetch runs: {}", err);
                self.runs.load = LoadState::Failed("Failed to fetch runs.".to_string());
            }
            FetchPayload::Detail(result) => {
                if let Some(detail) = &mut self.detail {
                    detail.load = match result {
                        Ok(run) => LoadState::Ready(run),
                        Err(ApiError::NotFound(run_id)) => {
                            debug!("run not found: {}", run_id);
                            LoadState::NotFound
                        }
                        Err(err) => {
                            error!("failed to fetch run detail: {}", err);
                            LoadState::Failed("Failed to fetch run detail.".to_string())
                        }
                    };
                }
            }
            FetchPayload::Compare(result) => {
                if let Some(compare) = &mut self.compare {
                    compare.load = match result {
                        Ok(runs) => LoadState::Ready(Comparison::build(runs)),
                        Err(err) => {
                            error!("failed to load comparison: {}", err);
                            LoadState::Failed("Failed to load one or more runs.".to_string())
                        }
                    };
                }
            }
        }
    }

    /// Raise a blocking notice
    pub fn raise_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Handle a key event. Returns false when the application should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent, tx: &FetchTx) -> Result<bool> {
        // A visible notice swallows all input until dismissed.
        if self.notice.is_some() {
            if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return Ok(true);
        }

        // While typing into the search box, every key belongs to it.
        if matches!(self.route, Route::Runs) && self.runs.search_mode {
            handle_runs_keys(self, key_event, tx)?;
            return Ok(true);
        }

        match key_event.code {
            KeyCode::Char('q') => return Ok(false),
            KeyCode::Char('1') => self.navigate(Route::Home, tx),
            KeyCode::Char('2') => self.navigate(Route::Runs, tx),
            KeyCode::Char('3') => {
                let ids = self.runs.selection.ids().to_vec();
                self.navigate(Route::compare(ids), tx);
            }
            KeyCode::Char('4') => self.navigate(Route::About, tx),
            _ => match self.route.clone() {
                Route::Home => handle_home_keys(self, key_event, tx)?,
                Route::Runs => handle_runs_keys(self, key_event, tx)?,
                Route::RunDetail(_) => handle_detail_keys(self, key_event, tx)?,
                Route::Compare { .. } => handle_compare_keys(self, key_event, tx)?,
                Route::About => handle_about_keys(self, key_event, tx)?,
            },
        }

        Ok(true)
    }
}
