//! Selection policies over an ordered deployment history.
//!
//! All selectors only ever look at the most recent deployment and its most
//! recent status; they never scan deeper into the history. They are pure:
//! logging happens at the orchestration boundary, not here.

use crate::error::SelectError;
use crate::history::History;

pub const STATE_SUCCESS: &str = "success";
pub const STATE_ACTIVE: &str = "active";

/// Permissive policy: id and latest-status label of the most recent
/// deployment, with no check on the status value. Absence is expressed
/// through `None` / empty string, never an error.
pub fn latest_unconditional(history: &History) -> (Option<i64>, String) {
    let Some(deployment) = history.first() else {
        return (None, String::new());
    };
    let state = deployment
        .last_status()
        .and_then(|s| s.state.clone())
        .unwrap_or_default();
    (deployment.id, state)
}

/// Strict policy: the most recent deployment's id, only if its most recent
/// status state equals `required_state` exactly.
pub fn latest_with_required_state(
    history: &History,
    required_state: &str,
) -> Result<i64, SelectError> {
    let deployment = history.first().ok_or(SelectError::EmptyHistory)?;
    let id = deployment.id.ok_or(SelectError::MissingId)?;
    let status = deployment
        .last_status()
        .ok_or(SelectError::NoStatuses { id })?;
    let found = status.state.clone().unwrap_or_default();
    if found != required_state {
        return Err(SelectError::StateMismatch { id, found });
    }
    Ok(id)
}

/// Strict policy requiring the latest status to be "success".
pub fn latest_successful(history: &History) -> Result<i64, SelectError> {
    latest_with_required_state(history, STATE_SUCCESS)
}

/// Strict policy requiring the latest status to be "active".
pub fn latest_active(history: &History) -> Result<i64, SelectError> {
    latest_with_required_state(history, STATE_ACTIVE)
}
