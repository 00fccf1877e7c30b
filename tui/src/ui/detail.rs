//! Run Detail View Module
//!
//! This module renders one run's full profile: a metadata header, a radar
//! chart and a horizontal bar chart built from the same per-category score
//! array, and a Vision-only analysis panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use semantiq_dash_core::models::{fmt_score, DomainDetail, RunDetail};

use crate::app::{DashApp, LoadState};
use crate::ui::charts::{render_category_bars, render_radar, series_color, RadarSeries};
use crate::ui::domain_badge;

/// Render the run detail view
pub fn render_detail(app: &mut DashApp, frame: &mut Frame, area: Rect) {
    let Some(view) = &app.detail else {
        return;
    };
    match &view.load {
        LoadState::Loading => render_message(frame, area, "Loading...", Color::Gray),
        LoadState::NotFound => render_message(frame, area, "Run not found.", Color::Red),
        LoadState::Failed(message) => render_message(frame, area, message, Color::Red),
        LoadState::Ready(run) => render_loaded(run, frame, area),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title("Run Detail"));
    frame.render_widget(paragraph, area);
}

fn render_loaded(run: &RunDetail, frame: &mut Frame, area: Rect) {
    let is_vision = matches!(run.extra, DomainDetail::Vision { .. });
    let panel_height = if is_vision { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),             // Header
            Constraint::Min(0),                // Charts
            Constraint::Length(panel_height), // Vision panel
        ])
        .split(area);

    render_header(run, frame, chunks[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    let axes: Vec<String> = run
        .categories()
        .iter()
        .map(|c| c.category_id.clone())
        .collect();
    let series = RadarSeries {
        name: run.subject(),
        values: run.categories().iter().map(|c| c.score).collect(),
        color: series_color(0),
    };
    render_radar(frame, charts[0], "Performance Profile", &axes, &[series]);
    render_category_bars(
        frame,
        charts[1],
        "Category Breakdown",
        run.categories(),
        series_color(0),
    );

    if is_vision {
        render_vision_panel(run, frame, chunks[2]);
    }
}

/// Render the metadata header block
fn render_header(run: &RunDetail, frame: &mut Frame, area: Rect) {
    let meta = &run.summary.metadata;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                run.subject().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            domain_badge(run.domain()),
            Span::raw("    Overall Score: "),
            Span::styled(
                fmt_score(run.summary.overall_score),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(format!("Run ID: {}", run.run_id())),
        Line::raw(format!(
            "Provider: {}    Model: {}    Date: {}    Status: {}",
            meta.provider,
            meta.model,
            meta.date(),
            meta.status_label()
        )),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the Vision-only analysis panel
fn render_vision_panel(run: &RunDetail, frame: &mut Frame, area: Rect) {
    let DomainDetail::Vision { violation_rate, .. } = &run.extra else {
        return;
    };
    let rate_line = match violation_rate {
        Some(rate) => format!(
            "Violation rate: {} — how often semantic constraints were breached.",
            fmt_score(*rate)
        ),
        None => "Violation rate: not reported for this run.".to_string(),
    };
    let panel = Paragraph::new(vec![
        Line::raw("Vision benchmarks focus on semantic adherence."),
        Line::raw(rate_line),
        Line::styled(
            format!(
                "Image artifacts are available locally in runs/vision/{}/images",
                run.run_id()
            ),
            Style::default().fg(Color::Gray),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Vision Analysis"));
    frame.render_widget(panel, area);
}
