//! Layout components (header, panels, status bar)

use crate::app::App;
use crate::state::{PanelFocus, SubmissionStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Title shown in the header row
pub const HEADER_TITLE: &str = "Personalized Diet Plan";

/// Areas of the main screen
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub plan: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, form and plan panels, and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Form
            Constraint::Percentage(60), // Plan
        ])
        .split(rows[1]);

    ScreenLayout {
        header: rows[0],
        form: columns[0],
        plan: columns[1],
        status_bar: rows[2],
    }
}

/// Draw the header row
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(HEADER_TITLE)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let submission = &state.submission;

    // Build status bar content
    let mut spans = vec![];

    let indicator = match submission.status {
        SubmissionStatus::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionStatus::Pending => Span::styled(
            format!(" {} ", state.spinner()),
            Style::default().fg(Color::Cyan),
        ),
        SubmissionStatus::Succeeded => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionStatus::Failed => Span::styled(" ● ", Style::default().fg(Color::Red)),
    };
    spans.push(indicator);
    spans.push(Span::raw(submission.status.label()));
    spans.push(Span::raw(" | "));

    // Focus-specific hints
    spans.push(Span::styled(
        get_focus_hints(state.focus),
        Style::default().fg(Color::Gray),
    ));

    if let Some(at) = submission.resolved_at {
        if submission.status == SubmissionStatus::Succeeded {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("Plan generated at {}", at.format("%H:%M:%S")),
                Style::default().fg(Color::Green),
            ));
        }
    }

    // Status message
    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused panel
fn get_focus_hints(focus: PanelFocus) -> &'static str {
    match focus {
        PanelFocus::Form => "Tab:next  ←/→:diet  ^S:submit  ^P:plan  ^Y:copy",
        PanelFocus::Plan => "j/k:scroll  PgUp/PgDn:page  Tab:form  ^Y:copy",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_panels() {
        let layout = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.form.width + layout.plan.width, 100);
        assert_eq!(layout.form.height, 38);
    }

    #[test]
    fn test_hints_follow_focus() {
        assert!(get_focus_hints(PanelFocus::Form).contains("^S:submit"));
        assert!(get_focus_hints(PanelFocus::Plan).contains("j/k:scroll"));
    }
}
