use super::timeline::{Schedule, Slice, Timeline};
use crate::process::{Process, ScheduleResult};

/// Give every process without an explicit priority its id as priority
pub fn fill_default_priorities(processes: &mut [Process]) {
    for p in processes.iter_mut() {
        if p.priority.is_none() {
            p.priority = Some(p.effective_priority());
        }
    }
}

/// Static priority, non-preemptive, arrival-blind.
///
/// All processes are treated as present at time 0: the output reports an
/// arrival time of 0 and waiting times accumulate as `wt[i] = wt[i-1] + bt[i-1]`
/// over the priority-sorted list.
pub fn schedule(processes: &[Process]) -> Schedule {
    let mut sorted = processes.to_vec();
    fill_default_priorities(&mut sorted);
    // Stable: equal priorities keep submission order
    sorted.sort_by_key(|p| p.effective_priority());

    let mut results: Vec<ScheduleResult> = Vec::with_capacity(sorted.len());
    let mut timeline = Timeline::new();

    for p in &sorted {
        let waiting_time = match results.last() {
            Some(prev) => prev.waiting_time + prev.burst_time,
            None => 0.0,
        };

        timeline.push(Slice::full(p.id, waiting_time, p.burst_time));
        results.push(ScheduleResult {
            arrival_time: 0.0,
            priority: p.priority,
            ..ScheduleResult::from_waiting(p, waiting_time)
        });
    }

    Schedule::new(results, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_and_waiting() {
        let processes = vec![
            Process::new(1, 0.0, 4.0).with_priority(3),
            Process::new(2, 5.0, 2.0).with_priority(1),
            Process::new(3, 9.0, 6.0).with_priority(2),
        ];
        let schedule = schedule(&processes);

        let bursts: Vec<_> = schedule.results.iter().map(|r| r.burst_time).collect();
        let waiting: Vec<_> = schedule.results.iter().map(|r| r.waiting_time).collect();
        assert_eq!(bursts, vec![2.0, 6.0, 4.0]);
        assert_eq!(waiting, vec![0.0, 2.0, 8.0]);

        assert!(schedule.results.iter().all(|r| r.arrival_time == 0.0));
        let priorities: Vec<_> = schedule.results.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_priority_defaults_to_id() {
        let processes = vec![
            Process::new(1, 0.0, 3.0),
            Process::new(2, 0.0, 1.0).with_priority(0),
            Process::new(3, 0.0, 2.0),
        ];
        let schedule = schedule(&processes);

        assert_eq!(schedule.timeline.execution_order(), vec![2, 1, 3]);
        let priorities: Vec<_> = schedule.results.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![Some(0), Some(1), Some(3)]);
    }

    #[test]
    fn test_priority_ties_are_stable() {
        let processes = vec![
            Process::new(1, 0.0, 3.0).with_priority(2),
            Process::new(2, 0.0, 1.0).with_priority(2),
            Process::new(3, 0.0, 2.0).with_priority(1),
        ];
        let schedule = schedule(&processes);
        assert_eq!(schedule.timeline.execution_order(), vec![3, 1, 2]);
    }

    #[test]
    fn test_fill_default_priorities() {
        let mut processes = vec![
            Process::new(4, 0.0, 1.0),
            Process::new(5, 0.0, 1.0).with_priority(9),
        ];
        fill_default_priorities(&mut processes);
        assert_eq!(processes[0].priority, Some(4));
        assert_eq!(processes[1].priority, Some(9));
    }

    #[test]
    fn test_priority_does_not_touch_input() {
        let processes = vec![Process::new(1, 3.0, 1.0)];
        let _ = schedule(&processes);
        assert_eq!(processes[0].priority, None);
        assert_eq!(processes[0].arrival_time, 3.0);
    }
}
