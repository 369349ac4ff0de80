//! Application state and core logic

use crate::service::{PlanError, PlanRequest, PlanService};
use crate::state::{
    AppState, FieldName, Form, PanelFocus, SubmissionEvent, SubmissionOutcome, SubmissionTicket,
};
use anyhow::{anyhow, Result};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// A settled plan request on its way back to the UI loop
#[derive(Debug)]
pub struct Resolution {
    pub ticket: SubmissionTicket,
    pub result: Result<String, PlanError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Plan generation service
    service: Arc<dyn PlanService>,
    /// Sender handed to each in-flight request
    resolution_tx: mpsc::UnboundedSender<Resolution>,
    /// Settled requests waiting to be applied
    resolution_rx: mpsc::UnboundedReceiver<Resolution>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(service: Arc<dyn PlanService>) -> Self {
        let (resolution_tx, resolution_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            service,
            resolution_tx,
            resolution_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance animation state
    pub fn on_tick(&mut self) {
        self.state.on_tick();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global shortcuts
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.try_submit();
                return;
            }
            KeyCode::Char('y') if ctrl => {
                self.copy_plan();
                return;
            }
            KeyCode::Char('p') if ctrl => {
                self.state.focus.toggle();
                return;
            }
            KeyCode::PageDown => {
                self.state.scroll_down_page();
                return;
            }
            KeyCode::PageUp => {
                self.state.scroll_up_page();
                return;
            }
            _ => {}
        }

        match self.state.focus {
            PanelFocus::Form => self.handle_form_key(key),
            PanelFocus::Plan => self.handle_plan_key(key),
        }
    }

    /// Handle keys while the details form has focus
    fn handle_form_key(&mut self, key: KeyEvent) {
        // Chords that are not shortcuts must not type their letter
        let typing = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let form = &mut self.state.form;
        let active = form.active_form_field().map(|f| f.name);
        let before = form.draft.clone();

        match (key.code, active) {
            (KeyCode::Tab, _) => form.next_field(),
            (KeyCode::BackTab, _) => form.prev_field(),
            (KeyCode::Down, Some(name)) if name != FieldName::History => form.next_field(),
            (KeyCode::Up, Some(name)) if name != FieldName::History => form.prev_field(),
            (KeyCode::Down, None) => form.next_field(),
            (KeyCode::Up, None) => form.prev_field(),
            (KeyCode::Enter, None) => {
                self.try_submit();
            }
            (KeyCode::Enter, Some(FieldName::History)) => form.input_char('\n'),
            (KeyCode::Enter, Some(_)) => form.next_field(),
            (KeyCode::Right | KeyCode::Char(' '), Some(FieldName::DietType)) => {
                form.next_diet_type()
            }
            (KeyCode::Left, Some(FieldName::DietType)) => form.prev_diet_type(),
            (KeyCode::Char(c), Some(_)) if typing => form.input_char(c),
            (KeyCode::Backspace, Some(_)) => form.backspace(),
            _ => {}
        }

        // Any edit makes a required-field hint stale
        if self.state.form.draft != before {
            self.state.validation_hint = None;
        }
    }

    /// Handle keys while the plan panel has focus
    fn handle_plan_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Home | KeyCode::Char('g') => self.state.reset_scroll(),
            KeyCode::Tab | KeyCode::BackTab => self.state.focus = PanelFocus::Form,
            _ => {}
        }
    }

    /// Submit from the UI: ignored while a request is pending, blocked
    /// while a required field is empty
    pub fn try_submit(&mut self) -> Option<SubmissionTicket> {
        if self.state.submission.is_pending() {
            debug!("Submit ignored, a plan request is already pending");
            return None;
        }
        if !self.state.check_required() {
            debug!(hint = ?self.state.validation_hint, "Submit blocked by required field");
            return None;
        }
        Some(self.submit())
    }

    /// Start a submission of the current draft.
    ///
    /// The state is `Pending` when this returns; the request itself runs on
    /// a spawned task and reports back through the resolution channel.
    pub fn submit(&mut self) -> SubmissionTicket {
        let ticket = self.state.submission.next_ticket();
        self.state.submission = self
            .state
            .submission
            .apply(SubmissionEvent::Submitted(ticket));
        self.state.reset_scroll();
        self.state.status_message = None;

        let request = PlanRequest::from(&self.state.form.draft);
        info!(%ticket, diet_type = %request.diet_type, "Submitting plan request");

        let service = Arc::clone(&self.service);
        let tx = self.resolution_tx.clone();
        tokio::spawn(async move {
            let result = service.generate_plan(request).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(Resolution { ticket, result });
        });

        ticket
    }

    /// Apply every resolution that has arrived. Returns how many were read.
    pub fn drain_resolutions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(resolution) = self.resolution_rx.try_recv() {
            self.apply_resolution(resolution);
            count += 1;
        }
        count
    }

    /// Wait for the next resolution and apply it
    #[cfg(test)]
    pub async fn next_resolution(&mut self) {
        if let Some(resolution) = self.resolution_rx.recv().await {
            self.apply_resolution(resolution);
        }
    }

    /// Feed one settled request through the submission reducer
    fn apply_resolution(&mut self, resolution: Resolution) {
        let Resolution { ticket, result } = resolution;

        if !self.state.submission.accepts(ticket) {
            debug!(
                %ticket,
                latest = ?self.state.submission.latest_ticket,
                ok = result.is_ok(),
                "Discarding superseded plan result"
            );
            return;
        }

        let outcome = match result {
            Ok(plan) => {
                info!(%ticket, bytes = plan.len(), "Plan generated");
                SubmissionOutcome::Plan(plan)
            }
            Err(e) => {
                error!(%ticket, kind = e.kind(), error = %e, "Plan generation failed");
                SubmissionOutcome::Failed
            }
        };

        self.state.submission = self.state.submission.apply(SubmissionEvent::Resolved {
            ticket,
            outcome,
            at: Local::now(),
        });
    }

    /// Copy the current plan to the clipboard, reporting in the status bar
    fn copy_plan(&mut self) {
        let message = match self.state.submission.plan.as_deref() {
            None => "No plan to copy".to_string(),
            Some(plan) => match copy_to_clipboard(plan) {
                Ok(()) => "Plan copied to clipboard".to_string(),
                Err(e) => {
                    error!("Clipboard copy failed: {e:#}");
                    "Failed to copy plan".to_string()
                }
            },
        };
        self.state.status_message = Some(message);
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| anyhow!(e))?;
    clipboard.set_text(text).map_err(|e| anyhow!(e))?;
    Ok(())
}
