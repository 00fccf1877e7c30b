//! Comparison View Module
//!
//! This module renders the side-by-side comparison: an overlaid radar chart
//! with one series per run, a synchronized table with an Overall Score row
//! followed by one row per unioned category, and a warning banner when the
//! selected runs span more than one domain.
//!
//! A category missing from a run charts as zero but shows "-" in the table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use semantiq_dash_core::models::fmt_score;
use semantiq_dash_core::Comparison;

use crate::app::{DashApp, LoadState};
use crate::ui::charts::{render_radar, series_color, RadarSeries};

/// Render the comparison view
pub fn render_compare(app: &mut DashApp, frame: &mut Frame, area: Rect) {
    let Some(view) = &app.compare else {
        return;
    };

    if view.ids.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw("No runs selected"),
            Line::raw(""),
            Line::raw("Go to the Runs tab (press 2), select up to 3 runs with Space,"),
            Line::raw("then press c to compare them."),
        ])
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Compare Runs"));
        frame.render_widget(empty, area);
        return;
    }

    match &view.load {
        LoadState::Loading => {
            let loading = Paragraph::new("Loading comparisons...")
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Compare Runs"));
            frame.render_widget(loading, area);
        }
        LoadState::NotFound | LoadState::Failed(_) => {
            let message = match &view.load {
                LoadState::Failed(message) => message.as_str(),
                _ => "Failed to load one or more runs.",
            };
            let failed = Paragraph::new(format!("Error: {}", message))
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Compare Runs"));
            frame.render_widget(failed, area);
        }
        LoadState::Ready(comparison) => render_loaded(comparison, frame, area),
    }
}

fn render_loaded(comparison: &Comparison, frame: &mut Frame, area: Rect) {
    let warning_height = if comparison.mixed_domains().is_some() {
        3
    } else {
        0
    };
    let table_height = (comparison.categories().len() as u16 + 4).min(12);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(warning_height), // Mixed-domain warning
            Constraint::Min(8),                 // Radar overlay
            Constraint::Length(table_height),   // Comparison table
        ])
        .split(area);

    if let Some(domains) = comparison.mixed_domains() {
        let names: Vec<&str> = domains.iter().map(|d| d.as_str()).collect();
        let warning = Paragraph::new(format!(
            "Comparing runs from different domains ({}). Scores may not be directly comparable.",
            names.join(", ")
        ))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(warning, chunks[0]);
    }

    let axes = comparison.categories().to_vec();
    let series: Vec<RadarSeries> = comparison
        .runs()
        .iter()
        .enumerate()
        .map(|(idx, run)| RadarSeries {
            name: run.subject(),
            values: comparison.series(idx),
            color: series_color(idx),
        })
        .collect();
    render_radar(frame, chunks[1], "Profile Comparison", &axes, &series);

    render_table(comparison, frame, chunks[2]);
}

/// Render the synchronized comparison table
fn render_table(comparison: &Comparison, frame: &mut Frame, area: Rect) {
    let mut header_cells = vec![Cell::from("Metric").style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )];
    for (idx, run) in comparison.runs().iter().enumerate() {
        header_cells.push(
            Cell::from(run.subject().to_string())
                .style(Style::default().fg(series_color(idx))),
        );
    }
    let header = Row::new(header_cells);

    let mut rows = Vec::new();
    // Overall Score row first
    let mut overall = vec![Cell::from("Overall Score")];
    for run in comparison.runs() {
        overall.push(Cell::from(fmt_score(run.summary.overall_score)));
    }
    rows.push(Row::new(overall).style(Style::default().add_modifier(Modifier::BOLD)));

    // One row per unioned category; missing cells render as "-"
    for category in comparison.categories() {
        let mut cells = vec![Cell::from(category.to_uppercase())];
        for idx in 0..comparison.runs().len() {
            let cell = match comparison.table_cell(idx, category) {
                Some(score) => fmt_score(score),
                None => "-".to_string(),
            };
            cells.push(Cell::from(cell));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(16)];
    widths.extend(
        std::iter::repeat(Constraint::Min(10)).take(comparison.runs().len()),
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Comparison"));
    frame.render_widget(table, area);
}
