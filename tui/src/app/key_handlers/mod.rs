//! View Key Handlers Module
//!
//! This module contains the per-view key handling logic. Global keys (quit,
//! tab navigation, notice dismissal) are handled in [`DashApp::handle_key_event`]
//! before these run.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use semantiq_dash_core::{Route, Toggle};

use crate::app::{DashApp, FetchTx, COMPARE_LIMIT_NOTICE};

/// Handle keys on the landing view
pub fn handle_home_keys(app: &mut DashApp, key_event: KeyEvent, tx: &FetchTx) -> Result<()> {
    if key_event.code == KeyCode::Enter {
        app.navigate(Route::Runs, tx);
    }
    Ok(())
}

/// Handle keys on the run list view
pub fn handle_runs_keys(app: &mut DashApp, key_event: KeyEvent, tx: &FetchTx) -> Result<()> {
    if app.runs.search_mode {
        match key_event.code {
            KeyCode::Char(c) => {
                app.runs.search.push(c);
                app.runs.clamp_cursor();
            }
            KeyCode::Backspace => {
                app.runs.search.pop();
                app.runs.clamp_cursor();
            }
            KeyCode::Enter | KeyCode::Esc => {
                app.runs.search_mode = false;
            }
            _ => {}
        }
        return Ok(());
    }

    match key_event.code {
        KeyCode::Up => {
            let len = app.runs.visible().len();
            if len > 0 {
                if app.runs.cursor > 0 {
                    app.runs.cursor -= 1;
                } else {
                    app.runs.cursor = len - 1;
                }
            }
        }
        KeyCode::Down => {
            let len = app.runs.visible().len();
            if len > 0 {
                if app.runs.cursor < len - 1 {
                    app.runs.cursor += 1;
                } else {
                    app.runs.cursor = 0;
                }
            }
        }
        KeyCode::Char('/') => {
            app.runs.search_mode = true;
        }
        KeyCode::Char('f') => {
            app.runs.filter = app.runs.filter.cycle();
            app.runs.clamp_cursor();
        }
        KeyCode::Char(' ') => {
            if let Some(run) = app.runs.run_under_cursor() {
                let run_id = run.run_id.clone();
                if app.runs.selection.toggle(&run_id) == Toggle::Rejected {
                    app.raise_notice(COMPARE_LIMIT_NOTICE);
                }
            }
        }
        KeyCode::Enter => {
            if let Some(run) = app.runs.run_under_cursor() {
                let run_id = run.run_id.clone();
                app.navigate(Route::RunDetail(run_id), tx);
            }
        }
        KeyCode::Char('c') => {
            if !app.runs.selection.is_empty() {
                let ids = app.runs.selection.ids().to_vec();
                app.navigate(Route::compare(ids), tx);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys on the run detail view
pub fn handle_detail_keys(app: &mut DashApp, key_event: KeyEvent, tx: &FetchTx) -> Result<()> {
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('b') => {
            app.navigate(Route::Runs, tx);
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys on the comparison view
pub fn handle_compare_keys(app: &mut DashApp, key_event: KeyEvent, tx: &FetchTx) -> Result<()> {
    match key_event.code {
        KeyCode::Esc | KeyCode::Char('b') => {
            app.navigate(Route::Runs, tx);
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys on the about view
pub fn handle_about_keys(_app: &mut DashApp, _key_event: KeyEvent, _tx: &FetchTx) -> Result<()> {
    Ok(())
}
