use super::timeline::Schedule;
use super::{fcfs, policy::SchedulingPolicy, priority, round_robin, sjf};
use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::process::{sort_by_id, Process, Ticks};

/// Dispatches a process list to the configured policy
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduler {
    policy: SchedulingPolicy,
    quantum: Ticks,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Result<Self, ScheduleError> {
        let policy = SchedulingPolicy::from_str(&config.algorithm)?;
        Self::with_policy(policy, config.quantum())
    }

    pub fn with_policy(policy: SchedulingPolicy, quantum: Ticks) -> Result<Self, ScheduleError> {
        let quantum = round_robin::validate_quantum(quantum)?;
        Ok(Self { policy, quantum })
    }

    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    /// Run the policy and return results ordered by process id.
    ///
    /// The timeline stays in execution order.
    pub fn schedule(&self, processes: &[Process]) -> Result<Schedule, ScheduleError> {
        log::debug!(
            "scheduling {} processes with {} (quantum {})",
            processes.len(),
            self.policy.tag(),
            self.quantum
        );

        let mut schedule = match self.policy {
            SchedulingPolicy::FCFS => fcfs::schedule(processes),
            SchedulingPolicy::SJF => sjf::schedule(processes),
            SchedulingPolicy::Priority => priority::schedule(processes),
            SchedulingPolicy::RoundRobin => round_robin::schedule(processes, self.quantum)?,
        };

        sort_by_id(&mut schedule.results);
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0.0, 8.0).with_priority(3),
            Process::new(2, 1.0, 4.0).with_priority(1),
            Process::new(3, 2.0, 9.0),
            Process::new(4, 3.0, 5.0).with_priority(2),
        ]
    }

    #[test]
    fn test_scheduler_creation() {
        let scheduler = Scheduler::new(SchedulerConfig::new("rr").with_quantum(3.0)).unwrap();
        assert_eq!(scheduler.policy(), SchedulingPolicy::RoundRobin);
        assert_eq!(scheduler.quantum(), 3.0);

        let scheduler = Scheduler::new(SchedulerConfig::new("sjf")).unwrap();
        assert_eq!(scheduler.quantum(), 1.0);
    }

    #[test]
    fn test_unknown_algorithm() {
        assert_eq!(
            Scheduler::new(SchedulerConfig::new("srtf")),
            Err(ScheduleError::UnknownAlgorithm("srtf".to_string()))
        );
    }

    #[test]
    fn test_invalid_quantum() {
        assert_eq!(
            Scheduler::new(SchedulerConfig::new("rr").with_quantum(0.0)),
            Err(ScheduleError::InvalidQuantum(0.0))
        );
        assert!(Scheduler::new(SchedulerConfig::new("rr").with_quantum(-2.0)).is_err());
        assert!(Scheduler::with_policy(SchedulingPolicy::RoundRobin, f64::INFINITY).is_err());
    }

    #[test]
    fn test_results_sorted_by_id_for_every_policy() {
        let processes = sample_processes();
        for policy in SchedulingPolicy::ALL {
            let scheduler = Scheduler::with_policy(policy, 2.0).unwrap();
            let schedule = scheduler.schedule(&processes).unwrap();

            let ids: Vec<_> = schedule.results.iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![1, 2, 3, 4], "{:?}", policy);

            for r in &schedule.results {
                assert_eq!(r.turnaround_time, r.waiting_time + r.burst_time);
                assert!(r.turnaround_time >= r.burst_time);
            }
        }
    }

    #[test]
    fn test_priority_results_realigned() {
        let scheduler = Scheduler::with_policy(SchedulingPolicy::Priority, 1.0).unwrap();
        let schedule = scheduler.schedule(&sample_processes()).unwrap();

        // Execution order: P2 (1), P4 (2), P1 (3), P3 (id 3 as priority, stable after P1)
        assert_eq!(schedule.timeline.execution_order(), vec![2, 4, 1, 3]);
        let waiting: Vec<_> = schedule.results.iter().map(|r| r.waiting_time).collect();
        assert_eq!(waiting, vec![9.0, 0.0, 17.0, 4.0]);
    }

    #[test]
    fn test_schedule_is_repeatable() {
        let processes = sample_processes();
        for policy in SchedulingPolicy::ALL {
            let scheduler = Scheduler::with_policy(policy, 2.0).unwrap();
            assert_eq!(
                scheduler.schedule(&processes).unwrap(),
                scheduler.schedule(&processes).unwrap()
            );
        }
    }
}
