use crate::process::Ticks;
use serde::Deserialize;

pub const DEFAULT_QUANTUM: Ticks = 1.0;

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Scheduling algorithm: "fcfs", "sjf", "priority" or "rr"
    pub algorithm: String,

    /// Round robin time quantum in ticks (default 1)
    #[serde(default)]
    pub quantum: Option<Ticks>,
}

impl SchedulerConfig {
    pub fn new(algorithm: &str) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            quantum: None,
        }
    }

    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Quantum with the default applied
    pub fn quantum(&self) -> Ticks {
        self.quantum.unwrap_or(DEFAULT_QUANTUM)
    }
}
