use super::report::ScheduleReport;
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::metrics::MetricsCollector;
use crate::process::{assign_ids, ProcessSpec, Ticks};
use crate::scheduler::{Scheduler, SchedulingPolicy};

/// Engine entry point: validates a submission, runs one policy over it
/// and aggregates the id-ordered results.
///
/// Holds no state between runs; every call works on its own copy of the input.
pub struct Simulator {
    scheduler: Scheduler,
}

impl Simulator {
    pub fn new(config: SchedulerConfig) -> Result<Self, ScheduleError> {
        Ok(Self {
            scheduler: Scheduler::new(config)?,
        })
    }

    pub fn from_scheduler(scheduler: Scheduler) -> Self {
        Self { scheduler }
    }

    /// Run the configured policy over `specs`, ids assigned 1..=n in order
    pub fn run(&self, specs: &[ProcessSpec]) -> Result<ScheduleReport, ScheduleError> {
        let processes = assign_ids(specs)?;
        let schedule = self.scheduler.schedule(&processes)?;
        let summary = MetricsCollector::from_results(&schedule.results).compute_summary();

        let policy = self.scheduler.policy();
        log::debug!(
            "{}: {} processes, avg wt {:.2}, avg tat {:.2}",
            policy.tag(),
            summary.num_processes,
            summary.avg_waiting_time,
            summary.avg_turnaround_time
        );

        Ok(ScheduleReport {
            algorithm: policy,
            quantum: policy.is_preemptive().then(|| self.scheduler.quantum()),
            processes: schedule.results,
            timeline: schedule.timeline,
            summary,
        })
    }

    /// Run every policy over the same submission
    pub fn compare(
        specs: &[ProcessSpec],
        quantum: Ticks,
    ) -> Result<Vec<ScheduleReport>, ScheduleError> {
        SchedulingPolicy::ALL
            .iter()
            .map(|&policy| {
                let scheduler = Scheduler::with_policy(policy, quantum)?;
                Simulator::from_scheduler(scheduler).run(specs)
            })
            .collect()
    }
}

/// One-shot helper: `algorithm` is one of fcfs, sjf, priority, rr
pub fn simulate(
    specs: &[ProcessSpec],
    algorithm: &str,
    quantum: Option<Ticks>,
) -> Result<ScheduleReport, ScheduleError> {
    let config = SchedulerConfig {
        algorithm: algorithm.to_string(),
        quantum,
    };
    Simulator::new(config)?.run(specs)
}
