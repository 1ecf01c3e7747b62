use super::timeline::{Schedule, Slice, Timeline};
use crate::process::{Process, ScheduleResult};
use ordered_float::OrderedFloat;

/// Shortest Job First, non-preemptive.
///
/// The execution order comes from a real clock simulation; waiting times
/// are then derived with `wt[i] = bt[i-1] + wt[i-1] + at[i-1] - at[i]`,
/// clamped at zero.
pub fn schedule(processes: &[Process]) -> Schedule {
    let (order, timeline) = execution_order(processes);

    let mut results: Vec<ScheduleResult> = Vec::with_capacity(order.len());
    for p in &order {
        let waiting_time = match results.last() {
            Some(prev) => {
                let wt = prev.burst_time + prev.waiting_time + prev.arrival_time - p.arrival_time;
                if wt < 0.0 {
                    log::warn!("sjf: clamping waiting time of P{} from {} to 0", p.id, wt);
                }
                wt.max(0.0)
            }
            None => 0.0,
        };
        results.push(ScheduleResult::from_waiting(p, waiting_time));
    }

    Schedule::new(results, timeline)
}

/// Pick the shortest arrived job each time the CPU frees up
fn execution_order(processes: &[Process]) -> (Vec<Process>, Timeline) {
    let mut pool = processes.to_vec();
    let mut order = Vec::with_capacity(pool.len());
    let mut timeline = Timeline::new();
    let mut current_time = 0.0;

    while !pool.is_empty() {
        // min_by_key keeps the first of equal bursts, i.e. current pool order
        let next = pool
            .iter()
            .enumerate()
            .filter(|(_, p)| p.arrival_time <= current_time)
            .min_by_key(|(_, p)| OrderedFloat(p.burst_time))
            .map(|(idx, _)| idx);

        let Some(idx) = next else {
            // Nothing ready, jump to the next arrival
            if let Some(earliest) = pool.iter().map(|p| OrderedFloat(p.arrival_time)).min() {
                log::trace!("sjf: idle {} -> {}", current_time, earliest);
                current_time = earliest.into_inner();
            }
            continue;
        };

        let process = pool.remove(idx);
        log::trace!(
            "sjf: P{} (burst {}) selected at t={}",
            process.id,
            process.burst_time,
            current_time
        );
        timeline.push(Slice::full(process.id, current_time, process.burst_time));
        current_time += process.burst_time;
        order.push(process);
    }

    (order, timeline)
}
