//! Frame composition. One function assembles the fixed vertical layout:
//! task list, progress bar, the `Enter Task` prompt, the input line, and
//! the quit hint. All drawing goes through the components; this module only
//! carves up the frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::config::DisplayConfig;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TaskList;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, config: &DisplayConfig) {
    use Constraint::{Length, Min};
    // list, blank, progress, blank, prompt, blank, input, blank, hint
    let layout = Layout::vertical([
        Length(config.list_height),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Length(1),
        Min(0),
    ]);
    let [
        list_area,
        _,
        progress_area,
        _,
        prompt_area,
        _,
        input_area,
        _,
        hint_area,
        _,
    ] = layout.areas(frame.area());

    TaskList::new(&mut tui.task_list, app.tasks.tasks()).render(frame, list_area);

    tui.progress_bar
        .render(frame, pad_left(progress_area, config.padding));

    frame.render_widget(Span::raw("Enter Task"), prompt_area);

    tui.input_box.render(frame, input_area);

    frame.render_widget(
        Span::styled("(esc to quit)", Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn pad_left(area: Rect, padding: u16) -> Rect {
    let padding = padding.min(area.width);
    Rect {
        x: area.x + padding,
        width: area.width - padding,
        ..area
    }
}
