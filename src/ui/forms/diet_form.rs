//! Patient details form

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::state::{Form, PanelFocus, SUBMIT_ROW};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Submit label while idle or settled
pub const SUBMIT_LABEL: &str = "Get Diet Plan";

/// Submit label while a request is pending
pub const PENDING_LABEL: &str = "Generating Plan...";

/// Draw the details form with its submit button and error line
pub fn draw_diet_form(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let form = &state.form;
    let has_focus = state.focus == PanelFocus::Form;

    let border_style = if has_focus {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(" Patient Details ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Age
            Constraint::Length(3),             // Weight
            Constraint::Min(5),                // History
            Constraint::Length(3),             // Diet type
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(2),             // Error / hint
        ])
        .split(inner);

    for index in 0..SUBMIT_ROW {
        if let Some(field) = form.get_field(index) {
            let is_active = has_focus && form.active_field_index == index;
            draw_field(frame, chunks[index], &field, &form.draft, is_active);
        }
    }

    let pending = state.submission.is_pending();
    let label = if pending {
        format!("{} {PENDING_LABEL}", state.spinner())
    } else {
        SUBMIT_LABEL.to_string()
    };
    render_button(
        frame,
        chunks[SUBMIT_ROW],
        &label,
        has_focus && form.is_submit_active(),
        !pending,
    );

    // A blocked submit is newer than any earlier failure
    if let Some(hint) = &state.validation_hint {
        draw_help_text(frame, chunks[5], hint, Color::Yellow);
    } else if let Some(message) = &state.submission.error_message {
        draw_help_text(frame, chunks[5], message, Color::Red);
    }
}
