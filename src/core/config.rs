//! # Display Configuration
//!
//! Layout and input limits gathered into one value object, constructed in
//! `main` and passed into the TUI at startup. There is no config file and no
//! CLI surface for these; `DisplayConfig::default()` is the only source.

use std::time::Duration;

/// Layout constants for the rendered frame and input handling.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Columns of left padding in front of the progress bar.
    pub padding: u16,
    /// Upper bound on the progress bar width, in columns.
    pub max_bar_width: u16,
    /// Rows reserved for the task list (title included).
    pub list_height: u16,
    /// Maximum number of characters accepted by the input field.
    pub input_char_limit: usize,
    /// Visible width of the input field, in columns.
    pub input_width: u16,
    /// Interval between progress ticks.
    pub tick_interval: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            padding: 2,
            max_bar_width: 50,
            list_height: 14,
            input_char_limit: 156,
            input_width: 20,
            tick_interval: Duration::from_secs(1),
        }
    }
}
