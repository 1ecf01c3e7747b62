use serde::{Deserialize, Serialize};

/// Aggregate metrics over one scheduling run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub num_processes: usize,

    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,

    pub max_waiting_time: f64,
    pub max_turnaround_time: f64,

    /// Sum of all bursts (CPU time actually used)
    pub total_burst_time: f64,
}
