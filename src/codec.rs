//! JSON encoding of action records and statistics reports

use crate::{ActionError, ActionRecord, ActionStatsView};

/// Decode a single `{"action": ..., "time": ...}` record
pub fn decode_action(raw: &str) -> Result<ActionRecord, ActionError> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode a report as a compact `[{"action": ..., "avg": ...}]` array
pub fn encode_report(view: &ActionStatsView) -> Result<String, ActionError> {
    serde_json::to_string(view).map_err(ActionError::Encode)
}

/// Encode a report as an indented array
pub fn encode_report_pretty(view: &ActionStatsView) -> Result<String, ActionError> {
    serde_json::to_string_pretty(view).map_err(ActionError::Encode)
}
