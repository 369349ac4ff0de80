//! Generated plan panel

use crate::app::App;
use crate::state::{wrapped_height, PanelFocus, SubmissionStatus};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shown while idle until the first plan arrives
pub const PLACEHOLDER: &str = "Assist your patients better - generate a diet plan based on medical history and dietary preferences.";

/// Draw the plan panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let has_focus = state.focus == PanelFocus::Plan;

    let border_style = if has_focus {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(" Diet Plan ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let submission = &state.submission;
    let paragraph = match (&submission.plan, submission.status) {
        (Some(plan), _) => {
            // Plan text is shown as delivered, line breaks included
            let inner = block.inner(area);
            let max_scroll = wrapped_height(plan, inner.width as usize)
                .saturating_sub(inner.height as usize);
            let scroll = state.plan_scroll.min(max_scroll).min(u16::MAX as usize) as u16;
            Paragraph::new(plan.as_str())
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
        }
        (None, SubmissionStatus::Pending) => Paragraph::new(Line::from(vec![
            Span::styled(state.spinner(), Style::default().fg(Color::Cyan)),
            Span::raw(" Generating your diet plan..."),
        ]))
        .alignment(Alignment::Center),
        (None, SubmissionStatus::Idle) if !submission.has_produced_plan => {
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
        }
        // Failure text lives under the submit button
        (None, _) => Paragraph::new(""),
    };

    frame.render_widget(paragraph.block(block), area);
}
