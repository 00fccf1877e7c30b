//! SemantIQ Dashboard TUI
//!
//! The TUI module provides the terminal user interface for the SemantIQ
//! benchmark dashboard: browsing run summaries, inspecting one run's profile,
//! and comparing up to three runs side by side.

pub mod app;
pub mod ui;

pub use app::DashApp;
pub use ui::render;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

use semantiq_dash_core::{ApiClient, DashConfig, Route};

/// Main dashboard runner
pub struct DashRunner {
    /// Shared API client
    client: Arc<ApiClient>,
    /// Event-loop poll interval
    tick: Duration,
}

impl DashRunner {
    /// Create a new dashboard runner from the resolved configuration
    pub fn new(config: &DashConfig) -> Self {
        Self {
            client: Arc::new(ApiClient::from_config(config)),
            tick: Duration::from_millis(config.tick_millis),
        }
    }

    /// Run the dashboard until the user quits
    pub async fn run(&self) -> Result<()> {
        info!("Starting SemantIQ dashboard (API: {})", self.client.base_url());

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create the application and the fetch-outcome channel
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = DashApp::new(Arc::clone(&self.client));
        app.navigate(Route::Home, &tx);

        // Run the application
        let mut continue_running = true;
        while continue_running {
            // Apply settled fetches before drawing; stale ones are dropped
            while let Ok(envelope) = rx.try_recv() {
                app.apply_fetch(envelope);
            }

            // Draw the UI
            terminal.draw(|f| render(&mut app, f))?;

            // Wait for an event
            if event::poll(self.tick)? {
                if let Event::Key(key) = event::read()? {
                    continue_running = app.handle_key_event(key, &tx)?;
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        info!("SemantIQ dashboard finished");
        Ok(())
    }
}
