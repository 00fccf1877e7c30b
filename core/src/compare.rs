//! Comparison Reconciliation Module
//!
//! This module contains the category-set reconciliation for side-by-side run
//! comparison. Runs from different domains rarely share category ids, so the
//! comparison works over the union of all category ids across the loaded runs.
//!
//! A category missing from a run contributes 0.0 to that run's chart series
//! but renders as "-" in the comparison table. The asymmetry is a deliberate
//! display choice carried over from the reference UI.

use crate::models::{Domain, RunDetail};

/// Reconciled view over up to three loaded run details
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Loaded runs in the order their ids were requested
    runs: Vec<RunDetail>,
    /// Union of category ids across all runs, in first-appearance order
    categories: Vec<String>,
}

impl Comparison {
    /// Build a comparison from loaded run details. The category union is
    /// accumulated by iterating runs in order, so union order follows first
    /// appearance.
    pub fn build(runs: Vec<RunDetail>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for run in &runs {
            for category in run.categories() {
                if !categories.contains(&category.category_id) {
                    categories.push(category.category_id.clone());
                }
            }
        }
        Self { runs, categories }
    }

    pub fn runs(&self) -> &[RunDetail] {
        &self.runs
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Score used for charting: a run missing the category charts as 0.0
    pub fn chart_score(&self, run_idx: usize, category_id: &str) -> f64 {
        self.runs
            .get(run_idx)
            .and_then(|run| run.score_for(category_id))
            .unwrap_or(0.0)
    }

    /// Cell value for the comparison table: a run missing the category has no
    /// value and renders as "-"
    pub fn table_cell(&self, run_idx: usize, category_id: &str) -> Option<f64> {
        self.runs
            .get(run_idx)
            .and_then(|run| run.score_for(category_id))
    }

    /// Chart series for one run, in category-union order
    pub fn series(&self, run_idx: usize) -> Vec<f64> {
        self.categories
            .iter()
            .map(|category| self.chart_score(run_idx, category))
            .collect()
    }

    /// Domains involved when the selected runs span more than one domain,
    /// deduplicated in first-appearance order. `None` when the comparison is
    /// homogeneous.
    pub fn mixed_domains(&self) -> Option<Vec<Domain>> {
        let mut domains: Vec<Domain> = Vec::new();
        for run in &self.runs {
            if !domains.contains(&run.domain()) {
                domains.push(run.domain());
            }
        }
        if domains.len() > 1 {
            Some(domains)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryScore, DomainDetail, RunMetadata, RunSummary};

    fn detail(run_id: &str, domain: Domain, categories: &[(&str, f64)]) -> RunDetail {
        RunDetail {
            summary: RunSummary {
                run_id: run_id.to_string(),
                domain,
                subject: run_id.to_uppercase(),
                overall_score: 0.5,
                categories: categories
                    .iter()
                    .map(|(id, score)| CategoryScore {
                        category_id: id.to_string(),
                        score: *score,
                        label: id.to_uppercase(),
                    })
                    .collect(),
                metadata: RunMetadata {
                    provider: "acme".to_string(),
                    model: "m".to_string(),
                    timestamp: "2024-01-01T00:00:00Z".to_string(),
                    status: None,
                },
            },
            extra: DomainDetail::Smf,
        }
    }

    #[test]
    fn test_union_follows_first_appearance() {
        let comparison = Comparison::build(vec![
            detail("r1", Domain::Smf, &[("a", 0.1), ("b", 0.2)]),
            detail("r2", Domain::Smf, &[("b", 0.3), ("c", 0.4)]),
        ]);
        assert_eq!(comparison.categories(), &["a", "b", "c"]);
    }

    #[test]
    fn test_missing_category_charts_zero_but_tables_dash() {
        let comparison = Comparison::build(vec![
            detail("r1", Domain::Smf, &[("a", 0.1), ("b", 0.2)]),
            detail("r2", Domain::Smf, &[("b", 0.3), ("c", 0.4)]),
        ]);
        // r1 has no "c": zero in the chart, absent in the table.
        assert_eq!(comparison.chart_score(0, "c"), 0.0);
        assert_eq!(comparison.table_cell(0, "c"), None);
        // r2 has "c" in both views.
        assert_eq!(comparison.chart_score(1, "c"), 0.4);
        assert_eq!(comparison.table_cell(1, "c"), Some(0.4));
    }

    #[test]
    fn test_series_follows_union_order() {
        let comparison = Comparison::build(vec![
            detail("r1", Domain::Smf, &[("a", 0.1), ("b", 0.2)]),
            detail("r2", Domain::Smf, &[("b", 0.3), ("c", 0.4)]),
        ]);
        assert_eq!(comparison.series(0), vec![0.1, 0.2, 0.0]);
        assert_eq!(comparison.series(1), vec![0.0, 0.3, 0.4]);
    }

    #[test]
    fn test_mixed_domains_reported_in_order() {
        let comparison = Comparison::build(vec![
            detail("r1", Domain::Smf, &[]),
            detail("r2", Domain::Vision, &[]),
        ]);
        assert_eq!(
            comparison.mixed_domains(),
            Some(vec![Domain::Smf, Domain::Vision])
        );
    }

    #[test]
    fn test_homogeneous_domains_raise_no_warning() {
        let comparison = Comparison::build(vec![
            detail("r1", Domain::Smf, &[]),
            detail("r2", Domain::Smf, &[]),
        ]);
        assert_eq!(comparison.mixed_domains(), None);
    }

    #[test]
    fn test_empty_comparison() {
        let comparison = Comparison::build(Vec::new());
        assert!(comparison.is_empty());
        assert!(comparison.categories().is_empty());
        assert_eq!(comparison.mixed_domains(), None);
    }
}
