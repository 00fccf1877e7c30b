//! Dashboard UI Module
//!
//! This module contains the UI rendering functionality for the dashboard. One
//! render function per view, dispatched on the current route, under a shared
//! frame of title bar, nav tabs, and status bar.

pub mod charts;
mod compare;
mod detail;
mod runs;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use semantiq_dash_core::models::Domain;
use semantiq_dash_core::Route;

use crate::app::DashApp;
use crate::ui::charts::domain_color;

/// Render the UI
pub fn render(app: &mut DashApp, frame: &mut Frame) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(size);

    // Render title bar
    let title = Paragraph::new(app.title.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    // Render nav tabs; highlight by exact route match
    let tabs = Tabs::new(vec!["Home", "Runs", "Compare", "About"])
        .block(Block::default().borders(Borders::BOTTOM))
        .select(app.route.tab_index().unwrap_or(usize::MAX))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow));
    frame.render_widget(tabs, chunks[1]);

    // Render main content based on the current route
    let route = app.route.clone();
    match route {
        Route::Home => render_home(frame, chunks[2]),
        Route::Runs => runs::render_runs(app, frame, chunks[2]),
        Route::RunDetail(_) => detail::render_detail(app, frame, chunks[2]),
        Route::Compare { .. } => compare::render_compare(app, frame, chunks[2]),
        Route::About => render_about(frame, chunks[2]),
    }

    // Render status bar
    let status_text = match app.route {
        Route::Home => "Home - Enter to browse runs, 1-4 to switch tabs, q to quit",
        Route::Runs => {
            if app.runs.search_mode {
                "Runs - typing search, Enter/Esc to finish"
            } else {
                "Runs - ↑↓ navigate, Space select (max 3), Enter detail, c compare, / search, f filter, q quit"
            }
        }
        Route::RunDetail(_) => "Run Detail - Esc/b back to list, q quit",
        Route::Compare { .. } => "Compare - Esc/b back to list, q quit",
        Route::About => "About - 1-4 to switch tabs, q to quit",
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, chunks[3]);

    // A notice overlays everything and blocks input until dismissed
    if let Some(message) = &app.notice {
        render_notice(frame, size, message);
    }
}

/// Render the landing view
fn render_home(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Intro
            Constraint::Length(7), // Domain cards
            Constraint::Min(0),    // Disclaimer
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::styled(
            "Unified Multimodal Benchmarking",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw("Explore and analyze performance across Text (SMF), Human-AI (HACS),"),
        Line::raw("and Vision (T2I) domains. Transparent, reproducible, research-focused."),
        Line::styled("Press Enter to view benchmark runs.", Style::default().fg(Color::Yellow)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(intro, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);
    let descriptions = [
        (Domain::Smf, "Semantic alignment & safety benchmarks for large language models."),
        (Domain::Hacs, "Human-in-the-loop evaluation for collaboration and interaction quality."),
        (Domain::Vision, "Deterministic rendering and semantic scoring for text-to-image models."),
    ];
    for (idx, (domain, description)) in descriptions.iter().enumerate() {
        let card = Paragraph::new(*description)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(domain_color(*domain)))
                    .title(domain.label()),
            );
        frame.render_widget(card, cards[idx]);
    }

    let disclaimer = Paragraph::new(
        "Research disclaimer: scores reflect adherence to specific, predefined benchmarks, \
         not general intelligence. No leaderboards, no competitive rankings without context.",
    )
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(Color::Yellow))
    .block(Block::default().borders(Borders::ALL).title("Disclaimer"));
    frame.render_widget(disclaimer, chunks[2]);
}

/// Render the about view
fn render_about(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::styled(
            "About SemantIQ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(
            "A unified framework for evaluating multimodal AI models with a focus on",
        ),
        Line::raw("semantic correctness, safety, and human interaction."),
        Line::raw(""),
        Line::styled("Ethical benchmarking", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw("- No intelligence claims: passing tests proves specific capabilities."),
        Line::raw("- Contextual scoring: scores come with breakdown profiles."),
        Line::raw("- Non-gamified: neutral visualizations, no winners or losers."),
        Line::raw(""),
        Line::raw("Local-first: all data stays on your machine; no telemetry."),
        Line::raw("Reproducible: runs are deterministic where possible and fully documented."),
    ];
    let about = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("About"));
    frame.render_widget(about, area);
}

/// Render the blocking notice modal
fn render_notice(frame: &mut Frame, area: Rect, message: &str) {
    let modal = centered_rect(50, 20, area);
    frame.render_widget(Clear, modal);
    let notice = Paragraph::new(vec![
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled("(Enter to dismiss)", Style::default().fg(Color::Gray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("Notice"),
    );
    frame.render_widget(notice, modal);
}

/// Centered sub-rectangle taking the given percentages of the area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Span for a colored domain badge
pub(crate) fn domain_badge(domain: Domain) -> Span<'static> {
    Span::styled(
        format!(" {} ", domain.as_str()),
        Style::default()
            .fg(Color::Black)
            .bg(domain_color(domain))
            .add_modifier(Modifier::BOLD),
    )
}
