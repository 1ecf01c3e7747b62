use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// Scheduling policy for process ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchedulingPolicy {
    /// First-Come-First-Served: processes run in arrival order
    #[serde(rename = "fcfs")]
    FCFS,
    /// Shortest Job First (non-preemptive): shortest burst among arrived processes
    #[serde(rename = "sjf")]
    SJF,
    /// Static priority (non-preemptive): lower value = higher priority, arrival ignored
    #[serde(rename = "priority")]
    Priority,
    /// Round Robin: preemptive, fixed time quantum
    #[serde(rename = "rr")]
    RoundRobin,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 4] = [
        SchedulingPolicy::FCFS,
        SchedulingPolicy::SJF,
        SchedulingPolicy::Priority,
        SchedulingPolicy::RoundRobin,
    ];

    pub fn from_str(s: &str) -> Result<Self, ScheduleError> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" => Ok(SchedulingPolicy::FCFS),
            "sjf" => Ok(SchedulingPolicy::SJF),
            "priority" => Ok(SchedulingPolicy::Priority),
            "rr" => Ok(SchedulingPolicy::RoundRobin),
            _ => Err(ScheduleError::UnknownAlgorithm(s.to_string())),
        }
    }

    /// Short tag accepted by `from_str`
    pub fn tag(&self) -> &'static str {
        match self {
            SchedulingPolicy::FCFS => "fcfs",
            SchedulingPolicy::SJF => "sjf",
            SchedulingPolicy::Priority => "priority",
            SchedulingPolicy::RoundRobin => "rr",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, SchedulingPolicy::RoundRobin)
    }
}

impl std::fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingPolicy::FCFS => write!(f, "First-Come, First-Served"),
            SchedulingPolicy::SJF => write!(f, "Shortest Job First"),
            SchedulingPolicy::Priority => write!(f, "Priority"),
            SchedulingPolicy::RoundRobin => write!(f, "Round Robin"),
        }
    }
}
