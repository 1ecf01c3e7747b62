use crate::metrics::MetricsSummary;
use crate::process::{ScheduleResult, Ticks};
use crate::scheduler::{SchedulingPolicy, Timeline};
use serde::{Deserialize, Serialize};

/// Everything one engine run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub algorithm: SchedulingPolicy,

    /// Only reported for round robin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,

    /// One entry per submitted process, ascending by id
    pub processes: Vec<ScheduleResult>,

    /// Execution trace in execution order
    pub timeline: Timeline,

    pub summary: MetricsSummary,
}

impl ScheduleReport {
    pub fn waiting_times(&self) -> Vec<Ticks> {
        self.processes.iter().map(|p| p.waiting_time).collect()
    }

    pub fn turnaround_times(&self) -> Vec<Ticks> {
        self.processes.iter().map(|p| p.turnaround_time).collect()
    }

    pub fn avg_waiting_time(&self) -> f64 {
        self.summary.avg_waiting_time
    }

    pub fn avg_turnaround_time(&self) -> f64 {
        self.summary.avg_turnaround_time
    }

    /// Completion tick per process as seen on the timeline, in id order
    pub fn completion_times(&self) -> Vec<Option<Ticks>> {
        self.processes
            .iter()
            .map(|p| self.timeline.completion_time(p.id))
            .collect()
    }

    /// Fraction of the makespan the CPU was busy
    pub fn cpu_utilization(&self) -> f64 {
        let makespan = self.timeline.makespan();
        if makespan <= 0.0 {
            return 0.0;
        }
        self.timeline.busy_time() / makespan
    }
}
