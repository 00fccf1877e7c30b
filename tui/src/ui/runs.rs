//! Run List View Module
//!
//! This module renders the run list: search and filter controls, the selection
//! banner, and the run table with domain badges and scores.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use semantiq_dash_core::models::fmt_score;

use crate::app::{DashApp, LoadState};
use crate::ui::domain_badge;

/// Render the run list view
pub fn render_runs(app: &mut DashApp, frame: &mut Frame, area: Rect) {
    let has_selection = !app.runs.selection.is_empty();
    let banner_height = if has_selection { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search + filter controls
            Constraint::Length(banner_height), // Selection banner
            Constraint::Min(0),                // Run table
        ])
        .split(area);

    render_controls(app, frame, chunks[0]);
    if has_selection {
        render_selection_banner(app, frame, chunks[1]);
    }

    match &app.runs.load {
        LoadState::Loading => {
            let loading = Paragraph::new("Loading runs...")
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Benchmark Runs"));
            frame.render_widget(loading, chunks[2]);
        }
        LoadState::Failed(message) => {
            let failed = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Benchmark Runs"));
            frame.render_widget(failed, chunks[2]);
        }
        // The list endpoint has no 404 path; NotFound never occurs here.
        LoadState::NotFound | LoadState::Ready(_) => render_table(app, frame, chunks[2]),
    }
}

/// Render the search box and domain filter line
fn render_controls(app: &DashApp, frame: &mut Frame, area: Rect) {
    let search_indicator = if app.runs.search_mode { "▌" } else { "" };
    let controls = Line::from(vec![
        Span::raw("Search: "),
        Span::styled(
            format!("{}{}", app.runs.search, search_indicator),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  ("),
        Span::styled("/", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" to edit)    Filter: "),
        Span::styled(
            app.runs.filter.label(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  ("),
        Span::styled("f", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" to cycle)"),
    ]);
    let paragraph = Paragraph::new(controls).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Render the "N runs selected" banner
fn render_selection_banner(app: &DashApp, frame: &mut Frame, area: Rect) {
    let count = app.runs.selection.len();
    let banner = Paragraph::new(format!(
        "{} run{} selected for comparison — press c to compare",
        count,
        if count == 1 { "" } else { "s" }
    ))
    .style(Style::default().fg(Color::Cyan))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

/// Render the filtered run table
fn render_table(app: &DashApp, frame: &mut Frame, area: Rect) {
    let visible = app.runs.visible();
    if visible.is_empty() {
        let empty = Paragraph::new("No runs found matching your filters.")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Benchmark Runs"));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        "Sel", "Run ID", "Subject / Model", "Domain", "Score", "Date",
    ])
    .style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let runs = app.runs.runs();
    let rows: Vec<Row> = visible
        .iter()
        .map(|idx| {
            let run = &runs[*idx];
            let selected = if app.runs.selection.contains(&run.run_id) {
                "[x]"
            } else {
                "[ ]"
            };
            Row::new(vec![
                Cell::from(selected),
                Cell::from(run.short_id().to_string())
                    .style(Style::default().fg(Color::Cyan)),
                Cell::from(run.subject.clone()),
                Cell::from(Line::from(domain_badge(run.domain))),
                Cell::from(fmt_score(run.overall_score))
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(run.metadata.date()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(18),
            Constraint::Min(16),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Benchmark Runs"))
    .highlight_style(
        Style::default()
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    state.select(Some(app.runs.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}
