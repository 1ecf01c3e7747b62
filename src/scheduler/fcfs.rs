//! First-Come-First-Served.
//!
//! Waiting times follow the textbook recurrence `wt[i] = bt[i-1] + wt[i-1]`
//! over the arrival-sorted list. The recurrence assumes back-to-back
//! arrivals: when the CPU goes idle between two processes the reported
//! waiting time still accumulates as if it had not. The timeline records
//! the actual clock, so the two can disagree for inputs with idle gaps.

use super::timeline::{Schedule, Slice, Timeline};
use crate::process::{Process, ScheduleResult};
use ordered_float::OrderedFloat;

pub fn schedule(processes: &[Process]) -> Schedule {
    let mut sorted = processes.to_vec();
    // Stable: equal arrivals keep submission order
    sorted.sort_by_key(|p| OrderedFloat(p.arrival_time));

    let mut results: Vec<ScheduleResult> = Vec::with_capacity(sorted.len());
    let mut timeline = Timeline::new();
    let mut current_time = 0.0;

    for p in &sorted {
        if p.arrival_time > current_time {
            if !results.is_empty() {
                log::warn!(
                    "fcfs: CPU idle {} -> {} before P{}; waiting time ignores the gap",
                    current_time,
                    p.arrival_time,
                    p.id
                );
            }
            current_time = p.arrival_time;
        }

        let waiting_time = match results.last() {
            Some(prev) => prev.burst_time + prev.waiting_time,
            None => 0.0,
        };

        log::trace!(
            "fcfs: P{} runs {} -> {} (wt={})",
            p.id,
            current_time,
            current_time + p.burst_time,
            waiting_time
        );

        timeline.push(Slice::full(p.id, current_time, p.burst_time));
        current_time += p.burst_time;
        results.push(ScheduleResult::from_waiting(p, waiting_time));
    }

    Schedule::new(results, timeline)
}
