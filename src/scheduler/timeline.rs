use crate::process::{ProcessId, ScheduleResult, Ticks};
use serde::{Deserialize, Serialize};

/// One contiguous run of a process on the CPU
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub id: ProcessId,
    pub start: Ticks,
    pub run: Ticks,
    pub remaining_before: Ticks,
    pub remaining_after: Ticks,
}

impl Slice {
    /// A non-preemptive run of the whole burst
    pub fn full(id: ProcessId, start: Ticks, burst: Ticks) -> Self {
        Self {
            id,
            start,
            run: burst,
            remaining_before: burst,
            remaining_after: 0.0,
        }
    }

    pub fn end(&self) -> Ticks {
        self.start + self.run
    }

    pub fn is_final(&self) -> bool {
        self.remaining_after <= 0.0
    }
}

/// Execution trace of one scheduling run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice
    pub fn makespan(&self) -> Ticks {
        self.slices.iter().map(Slice::end).fold(0.0, f64::max)
    }

    pub fn busy_time(&self) -> Ticks {
        self.slices.iter().map(|s| s.run).sum()
    }

    pub fn idle_time(&self) -> Ticks {
        (self.makespan() - self.busy_time()).max(0.0)
    }

    /// End of the last slice belonging to `id`
    pub fn completion_time(&self, id: ProcessId) -> Option<Ticks> {
        self.slices
            .iter()
            .rev()
            .find(|s| s.id == id)
            .map(Slice::end)
    }

    /// Process ids in the order they first ran
    pub fn execution_order(&self) -> Vec<ProcessId> {
        let mut order: Vec<ProcessId> = Vec::new();
        for slice in &self.slices {
            if !order.contains(&slice.id) {
                order.push(slice.id);
            }
        }
        order
    }

    /// Number of times a process was taken off the CPU before finishing
    pub fn preemptions(&self, id: ProcessId) -> usize {
        self.slices
            .iter()
            .filter(|s| s.id == id && !s.is_final())
            .count()
    }
}

/// Output of a single strategy: per-process results plus the trace that produced them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub results: Vec<ScheduleResult>,
    pub timeline: Timeline,
}

impl Schedule {
    pub fn new(results: Vec<ScheduleResult>, timeline: Timeline) -> Self {
        Self { results, timeline }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut timeline = Timeline::new();
        timeline.push(Slice {
            id: 1,
            start: 0.0,
            run: 2.0,
            remaining_before: 3.0,
            remaining_after: 1.0,
        });
        timeline.push(Slice::full(2, 2.0, 2.0));
        timeline.push(Slice {
            id: 1,
            start: 6.0,
            run: 1.0,
            remaining_before: 1.0,
            remaining_after: 0.0,
        });
        timeline
    }

    #[test]
    fn test_makespan_and_idle() {
        let timeline = sample_timeline();
        assert_eq!(timeline.makespan(), 7.0);
        assert_eq!(timeline.busy_time(), 5.0);
        assert_eq!(timeline.idle_time(), 2.0);
    }

    #[test]
    fn test_completion_time() {
        let timeline = sample_timeline();
        assert_eq!(timeline.completion_time(1), Some(7.0));
        assert_eq!(timeline.completion_time(2), Some(4.0));
        assert_eq!(timeline.completion_time(3), None);
    }

    #[test]
    fn test_execution_order_and_preemptions() {
        let timeline = sample_timeline();
        assert_eq!(timeline.execution_order(), vec![1, 2]);
        assert_eq!(timeline.preemptions(1), 1);
        assert_eq!(timeline.preemptions(2), 0);
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.makespan(), 0.0);
        assert_eq!(timeline.idle_time(), 0.0);
    }
}
