//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and cooperative: one `crossterm` poll delivers one event
//! at a time, and the progress timer is just a deadline the loop checks
//! between polls - a deferred message, not a thread. When the reducer
//! returns `Effect::Quit`, the loop exits and any pending deadline is
//! simply dropped.
//!
//! ## Redraw Strategy
//!
//! Conditional redraw: the loop only draws after an event or a tick mutated
//! something, and otherwise sleeps on the poll (capped so a scheduled tick
//! is never overslept). Events are drained before the next draw so a paste
//! burst renders once.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::DisplayConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ProgressBar, TaskListState};
use crate::tui::event::TuiEvent;

/// Longest the loop sleeps when no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    pub task_list: TaskListState,
    pub input_box: InputBox,
    pub progress_bar: ProgressBar,
}

impl TuiState {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            task_list: TaskListState::new(),
            input_box: InputBox::new(config.input_char_limit, config.input_width),
            progress_bar: ProgressBar::new(config),
        }
    }
}

pub fn run(config: DisplayConfig) -> std::io::Result<()> {
    let mut app = App::new();
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    tui.progress_bar.resize(terminal.size()?.width);

    // Arm the repeating progress timer; it reschedules itself from the
    // reducer's Effect until the progress value completes.
    let mut next_tick = Some(Instant::now() + config.tick_interval);
    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        // Sync component props with core state
        tui.task_list.sync(app.tasks.len());
        tui.progress_bar.ratio = app.progress;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, &config))?;
            needs_redraw = false;
        }

        // Fire the tick once its deadline has passed
        if let Some(deadline) = next_tick
            && Instant::now() >= deadline
        {
            needs_redraw = true;
            match dispatch(&mut app, Action::Tick) {
                Effect::ScheduleTick => next_tick = Some(deadline + config.tick_interval),
                Effect::Quit => break 'outer,
                Effect::None => next_tick = None,
            }
            continue;
        }

        // Sleep until the next event, but never past the tick deadline
        let timeout = next_tick
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);
        let first_event = event::poll_event_timeout(timeout)?;
        if first_event.is_none() {
            continue;
        }
        needs_redraw = true;

        // Process first event + drain everything pending before the next draw
        let drained = std::iter::from_fn(|| match event::poll_event_immediate() {
            Ok(event) => event,
            Err(e) => {
                warn!("Event drain failed: {e}");
                None
            }
        });
        for tui_event in first_event.into_iter().chain(drained) {
            match tui_event {
                TuiEvent::Resize(width, height) => {
                    debug!("Resize to {width}x{height}");
                    // The list picks its new width up from the frame area;
                    // only the bar keeps an explicit width.
                    tui.progress_bar.resize(width);
                }
                TuiEvent::Escape => {
                    if dispatch(&mut app, Action::Quit) == Effect::Quit {
                        break 'outer;
                    }
                }
                TuiEvent::ToggleDone => {
                    if let Some(index) = tui.task_list.selected() {
                        dispatch(&mut app, Action::Toggle(index));
                    }
                }
                TuiEvent::DeleteTask => {
                    if let Some(index) = tui.task_list.selected() {
                        dispatch(&mut app, Action::Remove(index));
                        tui.task_list.sync(app.tasks.len());
                    }
                }
                TuiEvent::Submit => {
                    if let Some(InputEvent::Submit(text)) =
                        tui.input_box.handle_event(&TuiEvent::Submit)
                    {
                        dispatch(&mut app, Action::Submit(text));
                    }
                }
                nav @ (TuiEvent::ListUp | TuiEvent::ListDown) => {
                    tui.task_list.handle_event(&nav);
                }
                TuiEvent::Error(message) => {
                    warn!("Input error: {message}");
                    dispatch(&mut app, Action::Error(message));
                }
                // Everything else is text editing
                other => {
                    tui.input_box.handle_event(&other);
                }
            }
        }
    }

    ratatui::restore();
    info!("Event loop finished");
    Ok(())
}

fn dispatch(app: &mut App, action: Action) -> Effect {
    debug!("Dispatching: {action:?}");
    update(app, action)
}
