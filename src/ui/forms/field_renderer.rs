//! Field rendering utilities for forms

use crate::state::{FormDraft, FormField, InputKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    draft: &FormDraft,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(draft);
    let cursor = if is_active && field.kind != InputKind::Choice {
        Span::styled("▌", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    };

    let content = if display_value.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(
                field.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
    } else if field.is_multiline {
        // split('\n') keeps a trailing empty line so the cursor follows a newline
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            cursor,
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.title()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a one-line help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
