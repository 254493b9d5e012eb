//! # Core Application Logic
//!
//! The to-do list's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • store  (tasks)       │
//!                    │  • marker (protocol)    │
//!                    │  • state  (App)         │
//!                    │  • action (reducer)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: ordered task list with toggle/remove/ratio
//! - [`marker`]: the `[ ]` / `[x]` display protocol
//! - [`state`]: the `App` struct - core state in one place
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: the `DisplayConfig` value object

pub mod action;
pub mod config;
pub mod marker;
pub mod state;
pub mod store;
