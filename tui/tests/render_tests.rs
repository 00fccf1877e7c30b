//! Render tests against ratatui's TestBackend: the views must show the right
//! cells for loaded, missing, and mixed-domain data.

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use semantiq_dash_core::models::{
    CategoryScore, Domain, DomainDetail, RunDetail, RunMetadata, RunSummary,
};
use semantiq_dash_core::{ApiClient, Comparison, Route};
use semantiq_dash_tui::app::{CompareView, DashApp, DetailView, LoadState};
use semantiq_dash_tui::render;

fn app() -> DashApp {
    DashApp::new(Arc::new(ApiClient::new("http://127.0.0.1:9/api")))
}

fn summary(run_id: &str, domain: Domain, subject: &str, categories: &[(&str, f64)]) -> RunSummary {
    RunSummary {
        run_id: run_id.to_string(),
        domain,
        subject: subject.to_string(),
        overall_score: 0.82,
        categories: categories
            .iter()
            .map(|(id, score)| CategoryScore {
                category_id: id.to_string(),
                score: *score,
                label: id.to_uppercase(),
            })
            .collect(),
        metadata: RunMetadata {
            provider: "Acme".to_string(),
            model: "gpt-x".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            status: None,
        },
    }
}

fn smf_detail(run_id: &str, subject: &str, categories: &[(&str, f64)]) -> RunDetail {
    RunDetail {
        summary: summary(run_id, Domain::Smf, subject, categories),
        extra: DomainDetail::Smf,
    }
}

fn draw(app: &mut DashApp) -> String {
    let backend = TestBackend::new(110, 34);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| render(app, f)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn runs_view_renders_fetched_row() {
    let mut app = app();
    app.route = Route::Runs;
    app.runs.load = LoadState::Ready(vec![summary(
        "r1",
        Domain::Smf,
        "GPT-X",
        &[("safety", 0.9)],
    )]);

    let screen = draw(&mut app);
    assert!(screen.contains("GPT-X"), "subject missing:\n{}", screen);
    assert!(screen.contains("SMF"), "domain badge missing:\n{}", screen);
    assert!(screen.contains("0.82"), "score missing:\n{}", screen);
    assert!(screen.contains("2024-01-01"), "date missing:\n{}", screen);
}

#[test]
fn runs_view_renders_empty_filter_message() {
    let mut app = app();
    app.route = Route::Runs;
    app.runs.load = LoadState::Ready(vec![summary("r1", Domain::Smf, "GPT-X", &[])]);
    app.runs.search = "nomatch".to_string();

    let screen = draw(&mut app);
    assert!(screen.contains("No runs found matching your filters."));
    assert!(!screen.contains("GPT-X"));
}

#[test]
fn detail_view_renders_not_found_state() {
    let mut app = app();
    app.route = Route::RunDetail("ghost".to_string());
    app.detail = Some(DetailView {
        run_id: "ghost".to_string(),
        load: LoadState::NotFound,
    });

    let screen = draw(&mut app);
    assert!(screen.contains("Run not found."));
}

#[test]
fn detail_view_shows_vision_panel_only_for_vision_runs() {
    let mut app = app();
    app.route = Route::RunDetail("v1".to_string());
    app.detail = Some(DetailView {
        run_id: "v1".to_string(),
        load: LoadState::Ready(RunDetail {
            summary: summary("v1", Domain::Vision, "PixelGen", &[("color", 0.7)]),
            extra: DomainDetail::Vision {
                prompt_scores: None,
                violation_rate: Some(0.12),
            },
        }),
    });
    let screen = draw(&mut app);
    assert!(screen.contains("Vision Analysis"));
    assert!(screen.contains("0.12"));

    app.detail = Some(DetailView {
        run_id: "s1".to_string(),
        load: LoadState::Ready(smf_detail("s1", "GPT-X", &[("safety", 0.9)])),
    });
    let screen = draw(&mut app);
    assert!(!screen.contains("Vision Analysis"));
}

#[test]
fn compare_view_renders_dash_for_missing_category() {
    let mut app = app();
    let ids = vec!["r1".to_string(), "r2".to_string()];
    app.route = Route::Compare { ids: ids.clone() };
    app.compare = Some(CompareView {
        ids,
        load: LoadState::Ready(Comparison::build(vec![
            smf_detail("r1", "GPT-X", &[("a", 0.1), ("b", 0.2)]),
            smf_detail("r2", "Claude-Y", &[("b", 0.3), ("c", 0.4)]),
        ])),
    });

    let screen = draw(&mut app);
    assert!(screen.contains("Overall Score"));
    // r1 has no "c": the category row holds r2's 0.40 next to a dash for r1.
    let dash_row = screen
        .lines()
        .any(|line| line.contains("0.40") && line.contains("-"));
    assert!(dash_row, "dash cell missing:\n{}", screen);
    // Homogeneous domains: no warning banner.
    assert!(!screen.contains("different domains"));
}

#[test]
fn compare_view_warns_on_mixed_domains() {
    let mut app = app();
    let ids = vec!["r1".to_string(), "v1".to_string()];
    app.route = Route::Compare { ids: ids.clone() };
    app.compare = Some(CompareView {
        ids,
        load: LoadState::Ready(Comparison::build(vec![
            smf_detail("r1", "GPT-X", &[("a", 0.1)]),
            RunDetail {
                summary: summary("v1", Domain::Vision, "PixelGen", &[("color", 0.7)]),
                extra: DomainDetail::Vision {
                    prompt_scores: None,
                    violation_rate: None,
                },
            },
        ])),
    });

    let screen = draw(&mut app);
    assert!(screen.contains("different domains"));
    assert!(screen.contains("SMF, VISION"));
}

#[test]
fn compare_view_renders_empty_state_without_ids() {
    let mut app = app();
    app.route = Route::Compare { ids: Vec::new() };
    app.compare = Some(CompareView {
        ids: Vec::new(),
        load: LoadState::Ready(Comparison::build(Vec::new())),
    });

    let screen = draw(&mut app);
    assert!(screen.contains("No runs selected"));
}

#[test]
fn notice_modal_overlays_current_view() {
    let mut app = app();
    app.route = Route::Runs;
    app.runs.load = LoadState::Ready(vec![summary("r1", Domain::Smf, "GPT-X", &[])]);
    app.raise_notice("You can compare up to 3 runs at a time.");

    let screen = draw(&mut app);
    assert!(screen.contains("You can compare up to 3 runs at a time."));
    assert!(screen.contains("Enter to dismiss"));
}
