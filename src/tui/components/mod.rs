//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Two patterns, both from `crate::tui::component`:
//!
//! ### Stateful components (event-driven)
//!
//! Persistent state structs implement `EventHandler`; a per-frame view
//! struct borrows the state plus the data to show and implements
//! `Component`:
//!
//! - `InputBox`: single-line text entry, emits `InputEvent::Submit`
//! - `TaskListState` / `TaskList`: selection state + the rendered list
//!
//! ### Props-only components
//!
//! - `ProgressBar`: holds its computed width; the ratio is a prop synced
//!   from `App` each frame
//!
//! ## Data Flow
//!
//! Components never reach into `App` themselves. The event loop syncs props
//! before drawing and resolves selection indices before dispatching actions,
//! so each component can be constructed and tested in isolation.

pub mod input_box;
pub mod progress_bar;
pub mod task_list;

pub use input_box::{InputBox, InputEvent};
pub use progress_bar::ProgressBar;
pub use task_list::{TaskList, TaskListState};
