//! Route Table Module
//!
//! This module contains the static route table shared by the navigation shell
//! and the views. Routes parse from and format back to the same path strings
//! the reference UI used, so a comparison link survives a parse/format round
//! trip with its run ids in order.

use std::fmt;

/// One navigable view of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — landing page
    Home,
    /// `/runs` — run list
    Runs,
    /// `/runs/{id}` — one run's detail
    RunDetail(String),
    /// `/compare?ids=a,b,c` — side-by-side comparison
    Compare { ids: Vec<String> },
    /// `/about` — project notes
    About,
}

impl Route {
    /// Parse a path (with optional query string) into a route. Unknown paths
    /// yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        match path {
            "/" => Some(Route::Home),
            "/runs" => Some(Route::Runs),
            "/about" => Some(Route::About),
            "/compare" => Some(Route::Compare {
                ids: parse_ids(query),
            }),
            _ => path
                .strip_prefix("/runs/")
                .filter(|id| !id.is_empty())
                .map(|id| Route::RunDetail(id.to_string())),
        }
    }

    /// Comparison route for a list of run ids
    pub fn compare(ids: Vec<String>) -> Route {
        Route::Compare { ids }
    }

    /// Index of the nav tab this route highlights, by exact match. Run detail
    /// is reachable only through the list and highlights no tab.
    pub fn tab_index(&self) -> Option<usize> {
        match self {
            Route::Home => Some(0),
            Route::Runs => Some(1),
            Route::Compare { .. } => Some(2),
            Route::About => Some(3),
            Route::RunDetail(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Runs => f.write_str("/runs"),
            Route::RunDetail(id) => write!(f, "/runs/{}", id),
            Route::Compare { ids } if ids.is_empty() => f.write_str("/compare"),
            Route::Compare { ids } => write!(f, "/compare?ids={}", ids.join(",")),
            Route::About => f.write_str("/about"),
        }
    }
}

/// Extract run ids from an `ids=` query parameter: comma-separated, empty
/// entries dropped
fn parse_ids(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("ids="))
        .map(|value| {
            value
                .split(',')
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes_round_trip() {
        for path in ["/", "/runs", "/about", "/compare"] {
            let route = Route::parse(path).unwrap();
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn test_run_detail_round_trip() {
        let route = Route::parse("/runs/smf_gpt-x_001").unwrap();
        assert_eq!(route, Route::RunDetail("smf_gpt-x_001".to_string()));
        assert_eq!(route.to_string(), "/runs/smf_gpt-x_001");
    }

    #[test]
    fn test_compare_ids_round_trip_preserves_order() {
        let route = Route::compare(vec!["r2".to_string(), "r1".to_string()]);
        let path = route.to_string();
        assert_eq!(path, "/compare?ids=r2,r1");
        assert_eq!(Route::parse(&path).unwrap(), route);
    }

    #[test]
    fn test_compare_empty_entries_dropped() {
        let route = Route::parse("/compare?ids=r1,,r2,").unwrap();
        assert_eq!(
            route,
            Route::Compare {
                ids: vec!["r1".to_string(), "r2".to_string()]
            }
        );
    }

    #[test]
    fn test_compare_without_query_has_no_ids() {
        assert_eq!(
            Route::parse("/compare").unwrap(),
            Route::Compare { ids: Vec::new() }
        );
        assert_eq!(
            Route::parse("/compare?other=1").unwrap(),
            Route::Compare { ids: Vec::new() }
        );
    }

    #[test]
    fn test_unknown_paths_do_not_parse() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/runs/"), None);
        assert_eq!(Route::parse("runs"), None);
    }

    #[test]
    fn test_tab_highlight_by_exact_match() {
        assert_eq!(Route::Home.tab_index(), Some(0));
        assert_eq!(Route::Runs.tab_index(), Some(1));
        assert_eq!(
            Route::Compare { ids: Vec::new() }.tab_index(),
            Some(2)
        );
        assert_eq!(Route::About.tab_index(), Some(3));
        assert_eq!(Route::RunDetail("r1".to_string()).tab_index(), None);
    }
}
