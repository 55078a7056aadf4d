pub mod widgets;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    // Width available for input text is total width - 2 (for borders)
    let available_width = frame.area().width.saturating_sub(2) as usize;

    // Grow the input field with its content so long feedback stays visible
    let input_lines = if app.feedback_input.is_empty() {
        1
    } else {
        let chars_count = app.feedback_input.chars().count();
        chars_count.div_ceil(available_width.max(1))
    };

    // Clamp: min 1 line, max ~50% of screen height
    let max_lines = (frame.area().height as usize / 2).saturating_sub(2);
    let actual_lines = input_lines.clamp(1, max_lines.max(1));

    #[allow(clippy::cast_possible_truncation)]
    let input_height = (actual_lines + 2) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Results pane (top, flexible)
            Constraint::Length(1),             // Empty gap
            Constraint::Length(1),             // Status line
            Constraint::Length(input_height),  // Input field (dynamic height)
            Constraint::Length(1),             // Bottom keymap bar
        ])
        .split(frame.area());

    widgets::render_results(frame, app, chunks[0]);
    // chunks[1] is the gap, left empty
    widgets::render_status_line(frame, app, chunks[2]);
    widgets::render_input_field(frame, app, chunks[3]);
    widgets::render_bottom_bar(frame, app, chunks[4]);

    // Render help window on top if active
    if app.show_help {
        widgets::render_help_window(frame, frame.area());
    }
}
