//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod plan_panel;

use crate::app::App;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());

    layout::draw_header(frame, screen.header);
    forms::draw_diet_form(frame, screen.form, app);
    plan_panel::draw(frame, screen.plan, app);
    layout::draw_status_bar(frame, screen.status_bar, app);
}

/// Inner (width, height) of the plan panel for a screen of `area`
pub fn plan_viewport(area: Rect) -> (u16, u16) {
    let plan = layout::create_layout(area).plan;
    (plan.width.saturating_sub(2), plan.height.saturating_sub(2))
}
