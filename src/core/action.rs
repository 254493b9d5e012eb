//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`. User submits
//! the input field? That's `Action::Submit(text)`. The tick timer fires?
//! That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the event loop what to do
//! next. No I/O happens here - scheduling and terminal work live in the
//! `tui` module.
//!
//! ```text
//! State + Action  →  update()  →  State' + Effect
//! ```
//!
//! This keeps the whole controller testable as plain function calls.

use crate::core::state::{App, TICK_INCREMENT};

/// An input event, already resolved to domain terms. Selection indices are
/// resolved by the list component before the action is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append the submitted text as a new task. Empty submissions are
    /// ignored.
    Submit(String),
    /// Flip the completion flag of the task at this index.
    Toggle(usize),
    /// Remove the task at this index.
    Remove(usize),
    /// One firing of the repeating progress timer.
    Tick,
    /// Terminate normally (escape key).
    Quit,
    /// A non-fatal input/update error to record.
    Error(String),
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Arm the progress timer for one more interval.
    ScheduleTick,
    /// Stop the event loop. Pending timers die with it.
    Quit,
}

/// Apply `action` to `app`. The only place core state is mutated.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Submit(text) => {
            if !text.is_empty() {
                app.tasks.append(text);
            }
            Effect::None
        }
        Action::Toggle(index) => {
            app.tasks.toggle(index);
            Effect::None
        }
        Action::Remove(index) => {
            app.tasks.remove(index);
            Effect::None
        }
        Action::Tick => {
            if app.progress >= 1.0 {
                return Effect::None;
            }
            app.progress += TICK_INCREMENT;
            if app.progress >= 1.0 {
                app.progress = 1.0;
                Effect::Quit
            } else {
                Effect::ScheduleTick
            }
        }
        Action::Quit => Effect::Quit,
        Action::Error(message) => {
            app.error = Some(message);
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_appends_incomplete_task() {
        let mut app = App::new();
        let effect = update(&mut app, Action::Submit("buy milk".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.get(0).unwrap().to_string(), "[ ] buy milk");
    }

    #[test]
    fn test_submit_empty_is_ignored() {
        let mut app = App::new();
        update(&mut app, Action::Submit(String::new()));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_toggle_and_remove_round_trip() {
        let mut app = App::new();
        update(&mut app, Action::Submit("buy milk".to_string()));

        update(&mut app, Action::Toggle(0));
        assert_eq!(app.tasks.get(0).unwrap().to_string(), "[x] buy milk");
        assert_eq!(app.tasks.completion_ratio(), 1.0);

        update(&mut app, Action::Remove(0));
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_toggle_remove_on_empty_store_are_noops() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Toggle(0)), Effect::None);
        assert_eq!(update(&mut app, Action::Remove(0)), Effect::None);
        assert!(app.tasks.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn test_four_ticks_reach_one_and_quit() {
        let mut app = App::new();

        assert_eq!(update(&mut app, Action::Tick), Effect::ScheduleTick);
        assert_eq!(app.progress, 0.25);
        assert_eq!(update(&mut app, Action::Tick), Effect::ScheduleTick);
        assert_eq!(app.progress, 0.50);
        assert_eq!(update(&mut app, Action::Tick), Effect::ScheduleTick);
        assert_eq!(app.progress, 0.75);

        // Fourth tick lands exactly on 1.0 and terminates; nothing is
        // rescheduled so a fifth tick never fires.
        assert_eq!(update(&mut app, Action::Tick), Effect::Quit);
        assert_eq!(app.progress, 1.0);
    }

    #[test]
    fn test_tick_after_completion_is_inert() {
        let mut app = App::new();
        app.progress = 1.0;
        assert_eq!(update(&mut app, Action::Tick), Effect::None);
        assert_eq!(app.progress, 1.0);
    }

    #[test]
    fn test_progress_is_independent_of_completion_ratio() {
        let mut app = App::new();
        update(&mut app, Action::Submit("a".to_string()));
        update(&mut app, Action::Toggle(0));
        // Every task is done, but the timer has not fired once.
        assert_eq!(app.tasks.completion_ratio(), 1.0);
        assert_eq!(app.progress, 0.0);
    }

    #[test]
    fn test_quit_action() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_error_is_stored_not_fatal() {
        let mut app = App::new();
        let effect = update(&mut app, Action::Error("bad key event".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.error.as_deref(), Some("bad key event"));
    }
}
