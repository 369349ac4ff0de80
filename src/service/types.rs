//! Wire types for the plan service and response normalization

use super::error::PlanError;
use crate::state::{DietType, FormDraft};
use serde::Serialize;
use serde_json::Value;

/// Longest server error body kept in a log line
const MAX_LOGGED_BODY: usize = 200;

/// Outbound payload, the four draft fields as entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub age: String,
    pub weight: String,
    pub history: String,
    pub diet_type: DietType,
}

impl From<&FormDraft> for PlanRequest {
    fn from(draft: &FormDraft) -> Self {
        Self {
            age: draft.age.clone(),
            weight: draft.weight.clone(),
            history: draft.history.clone(),
            diet_type: draft.diet_type,
        }
    }
}

/// Turn an HTTP status and body into the plan text or a classified error.
///
/// The plan is returned exactly as sent, including surrounding whitespace.
pub fn extract_plan(status: u16, body: &str) -> Result<String, PlanError> {
    if !(200..300).contains(&status) {
        return Err(PlanError::Server {
            status,
            message: server_message(body),
        });
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| PlanError::Payload(format!("body is not JSON: {e}")))?;

    match value.get("plan") {
        Some(Value::String(plan)) => Ok(plan.clone()),
        Some(other) => Err(PlanError::Payload(format!(
            "plan is not a string: {other}"
        ))),
        None => Err(PlanError::Payload("response has no plan".to_string())),
    }
}

/// Best effort message from an error body (`{"error": "..."}` or raw text)
fn server_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| truncate_str(body.trim(), MAX_LOGGED_BODY))
}

/// Truncate a string to a maximum length in characters with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
