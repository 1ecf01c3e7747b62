use crate::process::{ProcessId, Ticks};

/// Conditions the engine reports instead of computing a schedule
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Algorithm tag is not one of fcfs, sjf, priority or rr
    UnknownAlgorithm(String),
    /// A process descriptor lacks a required field
    MissingField { id: ProcessId, field: &'static str },
    /// Arrival time is negative or not a finite number
    InvalidArrivalTime { id: ProcessId, value: Ticks },
    /// Burst time is zero, negative or not a finite number
    InvalidBurstTime { id: ProcessId, value: Ticks },
    /// Round robin quantum must be a positive finite number
    InvalidQuantum(Ticks),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::UnknownAlgorithm(tag) => write!(f, "Unknown algorithm: {}", tag),
            ScheduleError::MissingField { id, field } => {
                write!(f, "Process P{} is missing required field '{}'", id, field)
            }
            ScheduleError::InvalidArrivalTime { id, value } => write!(
                f,
                "Process P{} has invalid arrival time {} (must be >= 0)",
                id, value
            ),
            ScheduleError::InvalidBurstTime { id, value } => write!(
                f,
                "Process P{} has invalid burst time {} (must be > 0)",
                id, value
            ),
            ScheduleError::InvalidQuantum(q) => {
                write!(f, "Invalid time quantum {} (must be > 0)", q)
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
