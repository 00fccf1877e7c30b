//! Run Filtering Module
//!
//! This module contains the run-list filter predicate and the bounded
//! comparison selection. Filtering is recomputed synchronously on every
//! keystroke; there is no debouncing.

use crate::models::{Domain, RunSummary};

/// Maximum number of runs that can be selected for comparison
pub const MAX_COMPARE: usize = 3;

/// Domain filter applied to the run list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainFilter {
    /// Show runs from every domain
    #[default]
    All,
    /// Show only runs from one domain
    Only(Domain),
}

impl DomainFilter {
    /// Whether a run of the given domain passes this filter
    pub fn matches(&self, domain: Domain) -> bool {
        match self {
            DomainFilter::All => true,
            DomainFilter::Only(only) => *only == domain,
        }
    }

    /// Advance to the next filter value: All -> SMF -> HACS -> VISION -> All
    pub fn cycle(self) -> Self {
        match self {
            DomainFilter::All => DomainFilter::Only(Domain::Smf),
            DomainFilter::Only(Domain::Smf) => DomainFilter::Only(Domain::Hacs),
            DomainFilter::Only(Domain::Hacs) => DomainFilter::Only(Domain::Vision),
            DomainFilter::Only(Domain::Vision) => DomainFilter::All,
        }
    }

    /// Label shown in the filter control
    pub fn label(&self) -> &'static str {
        match self {
            DomainFilter::All => "All Domains",
            DomainFilter::Only(domain) => domain.label(),
        }
    }
}

/// Whether one run is shown under the given filter and search term. A run
/// matches when its domain passes the filter and its subject or run id
/// contains the search term case-insensitively.
pub fn run_matches(run: &RunSummary, filter: DomainFilter, search: &str) -> bool {
    if !filter.matches(run.domain) {
        return false;
    }
    let needle = search.to_lowercase();
    run.subject.to_lowercase().contains(&needle) || run.run_id.to_lowercase().contains(&needle)
}

/// Indices of the runs visible under the given filter and search term,
/// preserving the fetched order
pub fn filter_runs(runs: &[RunSummary], filter: DomainFilter, search: &str) -> Vec<usize> {
    runs.iter()
        .enumerate()
        .filter(|(_, run)| run_matches(run, filter, search))
        .map(|(idx, _)| idx)
        .collect()
}

/// Outcome of toggling a run in the comparison selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
    /// The selection was already at capacity; no state change
    Rejected,
}

/// Insertion-ordered set of run ids selected for comparison, capped at
/// [`MAX_COMPARE`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership of one run id. Adding beyond capacity is rejected
    /// and leaves the selection unchanged.
    pub fn toggle(&mut self, run_id: &str) -> Toggle {
        if let Some(pos) = self.ids.iter().position(|id| id == run_id) {
            self.ids.remove(pos);
            return Toggle::Removed;
        }
        if self.ids.len() >= MAX_COMPARE {
            return Toggle::Rejected;
        }
        self.ids.push(run_id.to_string());
        Toggle::Added
    }

    pub fn contains(&self, run_id: &str) -> bool {
        self.ids.iter().any(|id| id == run_id)
    }

    /// Selected ids in insertion order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RunMetadata, RunSummary};

    fn run(run_id: &str, domain: Domain, subject: &str) -> RunSummary {
        RunSummary {
            run_id: run_id.to_string(),
            domain,
            subject: subject.to_string(),
            overall_score: 0.5,
            categories: Vec::new(),
            metadata: RunMetadata {
                provider: "acme".to_string(),
                model: "m".to_string(),
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                status: None,
            },
        }
    }

    fn fixture() -> Vec<RunSummary> {
        vec![
            run("smf_1", Domain::Smf, "GPT-X"),
            run("hacs_1", Domain::Hacs, "Human"),
            run("vision_1", Domain::Vision, "PixelGen"),
            run("smf_2", Domain::Smf, "Claude-Y"),
        ]
    }

    #[test]
    fn test_filter_all_empty_search_shows_everything() {
        let runs = fixture();
        assert_eq!(
            filter_runs(&runs, DomainFilter::All, ""),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_filter_by_domain() {
        let runs = fixture();
        assert_eq!(
            filter_runs(&runs, DomainFilter::Only(Domain::Smf), ""),
            vec![0, 3]
        );
    }

    #[test]
    fn test_search_matches_subject_case_insensitively() {
        let runs = fixture();
        assert_eq!(filter_runs(&runs, DomainFilter::All, "gpt"), vec![0]);
        assert_eq!(filter_runs(&runs, DomainFilter::All, "GPT"), vec![0]);
    }

    #[test]
    fn test_search_matches_run_id() {
        let runs = fixture();
        assert_eq!(filter_runs(&runs, DomainFilter::All, "vision_"), vec![2]);
    }

    #[test]
    fn test_domain_and_search_are_conjunctive() {
        let runs = fixture();
        // "1" appears in three run ids, but only one of them is SMF.
        assert_eq!(
            filter_runs(&runs, DomainFilter::Only(Domain::Smf), "1"),
            vec![0]
        );
    }

    #[test]
    fn test_search_with_no_matches() {
        let runs = fixture();
        assert!(filter_runs(&runs, DomainFilter::All, "nonexistent").is_empty());
    }

    #[test]
    fn test_filter_cycle_round_trips() {
        let mut filter = DomainFilter::All;
        for _ in 0..4 {
            filter = filter.cycle();
        }
        assert_eq!(filter, DomainFilter::All);
    }

    #[test]
    fn test_selection_toggle_add_remove() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle("r1"), Toggle::Added);
        assert!(selection.contains("r1"));
        assert_eq!(selection.toggle("r1"), Toggle::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_fourth_add_rejected_without_change() {
        let mut selection = Selection::new();
        for id in ["r1", "r2", "r3"] {
            assert_eq!(selection.toggle(id), Toggle::Added);
        }
        assert_eq!(selection.toggle("r4"), Toggle::Rejected);
        assert_eq!(selection.ids(), &["r1", "r2", "r3"]);
    }

    #[test]
    fn test_selection_removal_frees_capacity() {
        let mut selection = Selection::new();
        for id in ["r1", "r2", "r3"] {
            selection.toggle(id);
        }
        assert_eq!(selection.toggle("r2"), Toggle::Removed);
        assert_eq!(selection.toggle("r4"), Toggle::Added);
        assert_eq!(selection.ids(), &["r1", "r3", "r4"]);
    }

    #[test]
    fn test_selection_preserves_insertion_order() {
        let mut selection = Selection::new();
        selection.toggle("zeta");
        selection.toggle("alpha");
        assert_eq!(selection.ids(), &["zeta", "alpha"]);
    }
}
