//! Chart Rendering Module
//!
//! This module contains the radar and bar chart rendering shared by the run
//! detail and comparison views. Radar polygons are drawn on a braille canvas;
//! scores are clamped to [0, 1] for geometry but displayed unrounded-range
//! elsewhere.

use std::f64::consts::TAU;

use ratatui::layout::Direction;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use semantiq_dash_core::models::{fmt_score, CategoryScore, Domain};

/// Bounded palette for comparison series; cycles when exhausted
pub const SERIES_COLORS: [Color; 3] = [Color::Cyan, Color::Magenta, Color::Green];

/// Color of the series at the given run index
pub fn series_color(run_idx: usize) -> Color {
    SERIES_COLORS[run_idx % SERIES_COLORS.len()]
}

/// Accent color of a domain badge
pub fn domain_color(domain: Domain) -> Color {
    match domain {
        Domain::Smf => Color::Blue,
        Domain::Hacs => Color::Magenta,
        Domain::Vision => Color::LightRed,
    }
}

/// One radar series: a name for the legend and a value per axis
pub struct RadarSeries<'a> {
    pub name: &'a str,
    pub values: Vec<f64>,
    pub color: Color,
}

/// Render a radar chart with one polygon per series. `axes` carries the axis
/// labels in the same order as each series' values.
pub fn render_radar(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    axes: &[String],
    series: &[RadarSeries<'_>],
) {
    let axes = axes.to_vec();
    let polygons: Vec<(Vec<f64>, Color)> = series
        .iter()
        .map(|s| (s.values.clone(), s.color))
        .collect();
    let legend: Vec<(String, Color)> = series
        .iter()
        .map(|s| (s.name.to_string(), s.color))
        .collect();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .x_bounds([-1.8, 1.8])
        .y_bounds([-1.4, 1.4])
        .paint(move |ctx| {
            let n = axes.len();
            if n == 0 {
                return;
            }
            let angle = |i: usize| TAU * (i as f64) / (n as f64) + TAU / 4.0;

            // Grid rings and spokes
            for ring in [0.25, 0.5, 0.75, 1.0] {
                for i in 0..n {
                    let (x1, y1) = (angle(i).cos() * ring, angle(i).sin() * ring);
                    let next = angle((i + 1) % n);
                    let (x2, y2) = (next.cos() * ring, next.sin() * ring);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::DarkGray,
                    });
                }
            }
            for i in 0..n {
                let (x, y) = (angle(i).cos(), angle(i).sin());
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: Color::DarkGray,
                });
                ctx.print(
                    x * 1.35,
                    y * 1.2,
                    Line::styled(axes[i].to_uppercase(), Style::default().fg(Color::Gray)),
                );
            }

            // Series polygons
            for (values, color) in &polygons {
                for i in 0..n {
                    let r1 = values.get(i).copied().unwrap_or(0.0).clamp(0.0, 1.0);
                    let r2 = values.get((i + 1) % n).copied().unwrap_or(0.0).clamp(0.0, 1.0);
                    let a1 = angle(i);
                    let a2 = angle((i + 1) % n);
                    ctx.draw(&CanvasLine {
                        x1: a1.cos() * r1,
                        y1: a1.sin() * r1,
                        x2: a2.cos() * r2,
                        y2: a2.sin() * r2,
                        color: *color,
                    });
                }
            }

            // Legend in the top-left corner
            for (idx, (name, color)) in legend.iter().enumerate() {
                ctx.print(
                    -1.75,
                    1.3 - 0.15 * idx as f64,
                    Line::styled(format!("■ {}", name), Style::default().fg(*color)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Render the per-category horizontal bar chart of one run
pub fn render_category_bars(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    categories: &[CategoryScore],
    color: Color,
) {
    let bars: Vec<Bar> = categories
        .iter()
        .map(|category| {
            Bar::default()
                .label(Line::from(category.label.clone()))
                .value((category.score.clamp(0.0, 1.0) * 100.0).round() as u64)
                .text_value(fmt_score(category.score))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .max(100)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles_after_three_series() {
        assert_eq!(series_color(0), series_color(3));
        assert_eq!(series_color(1), series_color(4));
        assert_ne!(series_color(0), series_color(1));
    }
}
