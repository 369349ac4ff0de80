//! Application state definitions

use super::forms::{DietForm, FieldName, FormField};
use super::submission::SubmissionState;

/// Spinner frames for the busy indicator
const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Lines moved by PageUp/PageDown in the plan panel
const PAGE_LINES: usize = 10;

/// Which panel receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    #[default]
    Form,
    Plan,
}

impl PanelFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Form => Self::Plan,
            Self::Plan => Self::Form,
        };
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: DietForm,
    /// Required-field hint shown after a blocked submit
    pub validation_hint: Option<String>,

    // Submission
    pub submission: SubmissionState,

    // UI state
    pub focus: PanelFocus,
    pub plan_scroll: usize,
    /// Inner (width, height) of the plan panel from the last layout
    pub plan_viewport: Option<(u16, u16)>,
    pub status_message: Option<String>,
    pub tick: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance animation frames
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Current busy indicator frame
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    /// Block a submission that is missing a required field.
    /// Returns false (and focuses the field) when the draft is incomplete.
    pub fn check_required(&mut self) -> bool {
        match self.form.draft.first_missing_required() {
            Some(field) => {
                tracing::debug!(field = field.as_str(), "Required field is empty");
                self.validation_hint = Some(required_hint(field));
                self.form.focus(field);
                self.focus = PanelFocus::Form;
                false
            }
            None => {
                self.validation_hint = None;
                true
            }
        }
    }

    /// Record the plan panel size and pull the scroll back into range
    pub fn set_plan_viewport(&mut self, width: u16, height: u16) {
        self.plan_viewport = Some((width, height));
        self.plan_scroll = self.plan_scroll.min(self.max_plan_scroll());
    }

    /// Furthest scroll offset that still shows plan text
    pub fn max_plan_scroll(&self) -> usize {
        let Some(plan) = self.submission.plan.as_deref() else {
            return 0;
        };
        match self.plan_viewport {
            Some((width, height)) if width > 0 => {
                wrapped_height(plan, width as usize).saturating_sub(height as usize)
            }
            _ => plan.lines().count().saturating_sub(1),
        }
    }

    /// Scroll plan down
    pub fn scroll_down(&mut self) {
        self.plan_scroll = self
            .plan_scroll
            .saturating_add(1)
            .min(self.max_plan_scroll());
    }

    /// Scroll plan up
    pub fn scroll_up(&mut self) {
        self.plan_scroll = self.plan_scroll.saturating_sub(1);
    }

    /// Scroll down a page
    pub fn scroll_down_page(&mut self) {
        self.plan_scroll = self
            .plan_scroll
            .saturating_add(PAGE_LINES)
            .min(self.max_plan_scroll());
    }

    /// Scroll up a page
    pub fn scroll_up_page(&mut self) {
        self.plan_scroll = self.plan_scroll.saturating_sub(PAGE_LINES);
    }

    /// Reset plan scroll
    pub fn reset_scroll(&mut self) {
        self.plan_scroll = 0;
    }
}

/// Rows `text` takes when word-wrapped to `width` columns
pub fn wrapped_height(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    text.lines().map(|line| wrapped_line_height(line, width)).sum()
}

fn wrapped_line_height(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in line.split_inclusive(' ') {
        let visible = word.trim_end_matches(' ').chars().count();
        let spaces = word.chars().count() - visible;
        if used > 0 && used + visible > width {
            rows += 1;
            used = 0;
        }
        if visible > width {
            // Words longer than a row are broken across rows
            let extra = (visible - 1) / width;
            rows += extra;
            used = visible - extra * width;
        } else {
            used += visible;
        }
        used += spaces;
    }
    rows
}

fn required_hint(field: FieldName) -> String {
    format!("Please fill out {}", FormField::for_name(field).label)
}
