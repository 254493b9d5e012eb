//! # TaskList Component
//!
//! Scrollable list of tasks. Each row shows its 1-based position, the
//! completion marker, and the description; the selected row is prefixed
//! with `> ` and highlighted. The title line carries the completion
//! indicator (`k/n done`), which is derived from the store and entirely
//! separate from the timer-driven progress bar.
//!
//! Selection is presentation state: it lives here, not in the store, and
//! the event loop asks for it when building toggle/remove actions.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Padding};

use crate::core::store::Task;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const TITLE: &str = "Tasks List";

/// Persistent selection and scroll state for the task list.
pub struct TaskListState {
    list_state: ListState,
    /// Number of items, synced from the store each loop iteration so
    /// `handle_event` can bound the selection without reaching into core.
    pub item_count: usize,
}

impl TaskListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            item_count: 0,
        }
    }

    /// Index of the selected task, if any.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Reconcile selection with the current item count: select the first
    /// item as soon as one exists, clamp to the last after removals, and
    /// drop the selection when the list empties.
    pub fn sync(&mut self, item_count: usize) {
        self.item_count = item_count;
        if item_count == 0 {
            self.list_state.select(None);
        } else {
            match self.list_state.selected() {
                None => self.list_state.select(Some(0)),
                Some(i) if i >= item_count => self.list_state.select(Some(item_count - 1)),
                Some(_) => {}
            }
        }
    }
}

impl Default for TaskListState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for TaskListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.item_count == 0 {
            return None;
        }
        match event {
            TuiEvent::ListUp => {
                let next = self.selected().map_or(0, |i| i.saturating_sub(1));
                self.list_state.select(Some(next));
                None
            }
            TuiEvent::ListDown => {
                let next = self
                    .selected()
                    .map_or(0, |i| (i + 1).min(self.item_count - 1));
                self.list_state.select(Some(next));
                None
            }
            _ => None,
        }
    }
}

/// Task list view, created fresh each frame with references to state and
/// data.
pub struct TaskList<'a> {
    pub state: &'a mut TaskListState,
    pub tasks: &'a [Task],
}

impl<'a> TaskList<'a> {
    pub fn new(state: &'a mut TaskListState, tasks: &'a [Task]) -> Self {
        Self { state, tasks }
    }

    fn title_line(&self) -> Line<'static> {
        let completed = self.tasks.iter().filter(|t| t.done).count();
        let mut spans = vec![Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.tasks.is_empty() {
            spans.push(Span::styled(
                format!("  {}/{} done", completed, self.tasks.len()),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Line::from(spans)
    }
}

impl<'a> Component for TaskList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::new()
            .title(self.title_line())
            .padding(Padding::left(2));

        if self.tasks.is_empty() {
            let empty = List::new([ListItem::new(Span::styled(
                "No tasks.",
                Style::default().fg(Color::DarkGray),
            ))])
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| ListItem::new(format!("{}. {}", i + 1, task)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(Style::default().fg(Color::Indexed(170)));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn tasks(descriptions: &[&str]) -> Vec<Task> {
        descriptions.iter().map(|d| Task::new(*d)).collect()
    }

    #[test]
    fn test_sync_selects_first_item() {
        let mut state = TaskListState::new();
        assert_eq!(state.selected(), None);

        state.sync(2);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_sync_clamps_after_removal() {
        let mut state = TaskListState::new();
        state.sync(3);
        state.handle_event(&TuiEvent::ListDown);
        state.handle_event(&TuiEvent::ListDown);
        assert_eq!(state.selected(), Some(2));

        // Last item removed: selection clamps to the new last index.
        state.sync(2);
        assert_eq!(state.selected(), Some(1));

        state.sync(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut state = TaskListState::new();
        state.sync(2);

        state.handle_event(&TuiEvent::ListUp);
        assert_eq!(state.selected(), Some(0));

        state.handle_event(&TuiEvent::ListDown);
        state.handle_event(&TuiEvent::ListDown);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_navigation_on_empty_list_is_ignored() {
        let mut state = TaskListState::new();
        state.sync(0);
        state.handle_event(&TuiEvent::ListDown);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_render_numbers_and_markers() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TaskListState::new();
        let mut items = tasks(&["buy milk", "walk dog"]);
        items[1].done = true;
        state.sync(items.len());

        terminal
            .draw(|f| TaskList::new(&mut state, &items).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("1. [ ] buy milk"));
        assert!(text.contains("2. [x] walk dog"));
        assert!(text.contains("Tasks List"));
        assert!(text.contains("1/2 done"));
    }

    #[test]
    fn test_render_empty_list() {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TaskListState::new();
        state.sync(0);

        terminal
            .draw(|f| TaskList::new(&mut state, &[]).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("No tasks."));
    }
}
