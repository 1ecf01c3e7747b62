use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};

pub type ProcessId = u32;

/// Abstract time unit shared by arrival, burst, waiting and turnaround times
pub type Ticks = f64;

/// Lower value = higher priority
pub type Priority = i64;

/// Process descriptor as submitted by a caller.
///
/// Every field is optional at this level so that an incomplete descriptor
/// reaches validation and is reported with the offending process id,
/// instead of failing somewhere inside a deserializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    #[serde(default)]
    pub arrival_time: Option<Ticks>,

    #[serde(default)]
    pub burst_time: Option<Ticks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ProcessSpec {
    pub fn new(arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            arrival_time: Some(arrival_time),
            burst_time: Some(burst_time),
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A validated CPU-bound process
#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    /// 1-based position in the submitted list
    pub id: ProcessId,

    /// Tick at which the process becomes eligible to run
    pub arrival_time: Ticks,

    /// Total CPU time required
    pub burst_time: Ticks,

    /// Only consulted by the priority policy
    pub priority: Option<Priority>,
}

impl Process {
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Validate a caller descriptor and attach its id
    pub fn from_spec(id: ProcessId, spec: &ProcessSpec) -> Result<Self, ScheduleError> {
        let arrival_time = spec.arrival_time.ok_or(ScheduleError::MissingField {
            id,
            field: "arrival_time",
        })?;
        let burst_time = spec.burst_time.ok_or(ScheduleError::MissingField {
            id,
            field: "burst_time",
        })?;

        if !arrival_time.is_finite() || arrival_time < 0.0 {
            return Err(ScheduleError::InvalidArrivalTime {
                id,
                value: arrival_time,
            });
        }
        if !burst_time.is_finite() || burst_time <= 0.0 {
            return Err(ScheduleError::InvalidBurstTime {
                id,
                value: burst_time,
            });
        }

        Ok(Self {
            id,
            arrival_time,
            burst_time,
            priority: spec.priority,
        })
    }

    /// Priority used for ordering: the explicit value, or the id when none was given
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or(self.id as Priority)
    }
}

/// Validate a whole submission, assigning ids 1..=n in submission order.
/// Fails on the first invalid descriptor.
pub fn assign_ids(specs: &[ProcessSpec]) -> Result<Vec<Process>, ScheduleError> {
    specs
        .iter()
        .enumerate()
        .map(|(idx, spec)| Process::from_spec(idx as ProcessId + 1, spec))
        .collect()
}
