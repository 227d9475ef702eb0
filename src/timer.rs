//! The Pomodoro timer record — wire and storage model.

use serde::{Deserialize, Serialize};

/// One configured work/break interval pair.
///
/// `id` may be omitted from a create payload; every record returned by a
/// store has it populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    pub timer_length: u32,
    pub break_length: u32,
}
