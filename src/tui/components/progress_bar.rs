//! # ProgressBar Component
//!
//! Horizontal gradient bar for the timer-driven progress value. The fill
//! ramps through a pink-to-yellow gradient, one color step per column, with
//! a percentage label after the bar.
//!
//! The bar width is recomputed from the terminal width on every resize:
//! `min(terminal_width - 2 * padding - 4, max_width)`. The value shown here
//! is `App.progress`; the task completion ratio is a different number and is
//! rendered by the task list title instead.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::config::DisplayConfig;
use crate::tui::component::Component;

/// Gradient endpoints, left edge to right edge.
const GRADIENT_START: (u8, u8, u8) = (0xFF, 0x7C, 0xCB);
const GRADIENT_END: (u8, u8, u8) = (0xFD, 0xFF, 0x8C);

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Bar width for a terminal `term_width` columns wide.
pub fn bar_width(term_width: u16, padding: u16, max_width: u16) -> u16 {
    term_width.saturating_sub(2 * padding + 4).min(max_width)
}

/// Timer-driven progress bar.
///
/// # Props
///
/// - `ratio`: value to display, in [0.0, 1.0] (synced from `App.progress`)
///
/// # State
///
/// - `width`: current bar width in columns, updated via [`ProgressBar::resize`]
pub struct ProgressBar {
    pub ratio: f64,
    width: u16,
    padding: u16,
    max_width: u16,
}

impl ProgressBar {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            ratio: 0.0,
            width: config.max_bar_width,
            padding: config.padding,
            max_width: config.max_bar_width,
        }
    }

    /// Recompute the bar width for a new terminal width.
    pub fn resize(&mut self, term_width: u16) {
        self.width = bar_width(term_width, self.padding, self.max_width);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn gradient_color(&self, column: u16) -> Color {
        let t = if self.width <= 1 {
            0.0
        } else {
            column as f64 / (self.width - 1) as f64
        };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color::Rgb(
            lerp(GRADIENT_START.0, GRADIENT_END.0),
            lerp(GRADIENT_START.1, GRADIENT_END.1),
            lerp(GRADIENT_START.2, GRADIENT_END.2),
        )
    }
}

impl Component for ProgressBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let ratio = self.ratio.clamp(0.0, 1.0);
        let width = self.width.min(area.width);
        let filled = (ratio * width as f64).round() as u16;

        let mut spans = Vec::with_capacity(width as usize + 1);
        for column in 0..width {
            if column < filled {
                spans.push(Span::styled(
                    FILLED,
                    Style::default().fg(self.gradient_color(column)),
                ));
            } else {
                spans.push(Span::styled(EMPTY, Style::default().fg(Color::DarkGray)));
            }
        }
        spans.push(Span::raw(format!(" {:3.0}%", ratio * 100.0)));

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_bar_width_clamps_to_max() {
        assert_eq!(bar_width(200, 2, 50), 50);
    }

    #[test]
    fn test_bar_width_narrow_terminal() {
        assert_eq!(bar_width(30, 2, 50), 22);
    }

    #[test]
    fn test_bar_width_tiny_terminal_saturates() {
        assert_eq!(bar_width(5, 2, 50), 0);
    }

    #[test]
    fn test_resize_updates_width() {
        let mut bar = ProgressBar::new(&DisplayConfig::default());
        bar.resize(30);
        assert_eq!(bar.width(), 22);
        bar.resize(200);
        assert_eq!(bar.width(), 50);
    }

    #[test]
    fn test_render_shows_percent_label() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = ProgressBar::new(&DisplayConfig::default());
        bar.resize(60);
        bar.ratio = 0.75;

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("75%"));
        assert!(text.contains(FILLED));
        assert!(text.contains(EMPTY));
    }

    #[test]
    fn test_render_full_bar_has_no_empty_cells() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = ProgressBar::new(&DisplayConfig::default());
        bar.resize(60);
        bar.ratio = 1.0;

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("100%"));
        assert!(!text.contains(EMPTY));
    }

    #[test]
    fn test_gradient_endpoints() {
        let mut bar = ProgressBar::new(&DisplayConfig::default());
        bar.resize(58); // width 50
        assert_eq!(bar.gradient_color(0), Color::Rgb(0xFF, 0x7C, 0xCB));
        assert_eq!(bar.gradient_color(49), Color::Rgb(0xFD, 0xFF, 0x8C));
    }
}
