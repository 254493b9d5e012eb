//! # Application State
//!
//! Core state for the to-do list. Domain data only - no TUI types here.
//! Presentation state (list selection, input buffer, bar width) lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── tasks: TaskStore        // ordered to-do entries
//! ├── progress: f64           // timer-driven scalar in [0, 1]
//! └── error: Option<String>   // last non-fatal error, never rendered
//! ```
//!
//! `progress` is advanced only by the tick timer and is deliberately a
//! separate value from `tasks.completion_ratio()` - the bar and the
//! completion indicator are two independent readouts.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::store::TaskStore;

/// Amount added to `progress` on each timer tick.
pub const TICK_INCREMENT: f64 = 0.25;

pub struct App {
    pub tasks: TaskStore,
    /// Timer-driven progress value in [0.0, 1.0]. Not the completion ratio.
    pub progress: f64,
    /// Last non-fatal input/update error. Kept for potential display and
    /// logging; the frame does not render it.
    pub error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            tasks: TaskStore::new(),
            progress: 0.0,
            error: None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
