//! Submission lifecycle state and its reducer
//!
//! Every submission is tagged with a [`SubmissionTicket`]. Only the
//! resolution carrying the latest ticket may move the state out of
//! `Pending`; anything older is a superseded request and leaves the state
//! untouched.

use chrono::{DateTime, Local};

/// Message shown for every failed submission
pub const FAILURE_MESSAGE: &str = "Failed to generate diet plan. Please try again.";

/// Monotonically increasing tag of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(pub u64);

impl std::fmt::Display for SubmissionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the latest submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending => "Generating",
            Self::Succeeded => "Ready",
            Self::Failed => "Failed",
        }
    }
}

/// Normalized result of one outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Plan(String),
    Failed,
}

/// Inputs to the reducer
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    /// A submission was triggered
    Submitted(SubmissionTicket),
    /// A request settled
    Resolved {
        ticket: SubmissionTicket,
        outcome: SubmissionOutcome,
        at: DateTime<Local>,
    },
}

/// Status plus whichever of plan or error message belongs to it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub plan: Option<String>,
    pub error_message: Option<String>,
    pub latest_ticket: Option<SubmissionTicket>,
    pub resolved_at: Option<DateTime<Local>>,
    pub has_produced_plan: bool,
}

impl SubmissionState {
    /// Ticket for the next submission
    pub fn next_ticket(&self) -> SubmissionTicket {
        SubmissionTicket(self.latest_ticket.map_or(1, |t| t.0 + 1))
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Whether a resolution for `ticket` would be applied
    pub fn accepts(&self, ticket: SubmissionTicket) -> bool {
        self.is_pending() && self.latest_ticket == Some(ticket)
    }

    /// Pure transition: current state plus event gives the next state
    pub fn apply(&self, event: SubmissionEvent) -> SubmissionState {
        match event {
            SubmissionEvent::Submitted(ticket) => SubmissionState {
                status: SubmissionStatus::Pending,
                plan: None,
                error_message: None,
                latest_ticket: Some(ticket),
                resolved_at: None,
                has_produced_plan: self.has_produced_plan,
            },
            SubmissionEvent::Resolved { ticket, .. } if !self.accepts(ticket) => self.clone(),
            SubmissionEvent::Resolved {
                outcome: SubmissionOutcome::Plan(plan),
                at,
                ..
            } => SubmissionState {
                status: SubmissionStatus::Succeeded,
                plan: Some(plan),
                error_message: None,
                resolved_at: Some(at),
                has_produced_plan: true,
                ..self.clone()
            },
            SubmissionEvent::Resolved {
                outcome: SubmissionOutcome::Failed,
                at,
                ..
            } => SubmissionState {
                status: SubmissionStatus::Failed,
                plan: None,
                error_message: Some(FAILURE_MESSAGE.to_string()),
                resolved_at: Some(at),
                ..self.clone()
            },
        }
    }
}
