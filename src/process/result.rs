use super::process::{Priority, Process, ProcessId, Ticks};
use serde::{Deserialize, Serialize};

/// Per-process scheduling metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub id: ProcessId,

    /// Echoed from the input, except under the priority policy where it is always 0
    pub arrival_time: Ticks,

    pub burst_time: Ticks,

    /// Time spent ready but not running (never negative)
    pub waiting_time: Ticks,

    /// waiting_time + burst_time
    pub turnaround_time: Ticks,

    /// Only present in priority policy output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ScheduleResult {
    /// Build a result whose turnaround is derived from the waiting time
    pub fn from_waiting(process: &Process, waiting_time: Ticks) -> Self {
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            waiting_time,
            turnaround_time: waiting_time + process.burst_time,
            priority: None,
        }
    }
}

/// Restore submission order
pub fn sort_by_id(results: &mut [ScheduleResult]) {
    results.sort_by_key(|r| r.id);
}
