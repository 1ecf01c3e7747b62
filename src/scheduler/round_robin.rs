use super::timeline::{Schedule, Slice, Timeline};
use crate::error::ScheduleError;
use crate::process::{Process, ScheduleResult, Ticks};
use ordered_float::OrderedFloat;
use std::collections::VecDeque;

/// A quantum must be finite and strictly positive
pub fn validate_quantum(quantum: Ticks) -> Result<Ticks, ScheduleError> {
    if quantum.is_finite() && quantum > 0.0 {
        Ok(quantum)
    } else {
        Err(ScheduleError::InvalidQuantum(quantum))
    }
}

/// Round Robin with a fixed time quantum.
///
/// Fails with `InvalidQuantum` before touching the queue when `quantum` is
/// zero, negative or not finite.
pub fn schedule(processes: &[Process], quantum: Ticks) -> Result<Schedule, ScheduleError> {
    let quantum = validate_quantum(quantum)?;
    let n = processes.len();
    let mut remaining: Vec<Ticks> = processes.iter().map(|p| p.burst_time).collect();
    let mut results: Vec<Option<ScheduleResult>> = vec![None; n];
    let mut timeline = Timeline::new();

    // Not yet admitted, in arrival order (ties keep submission order)
    let mut arrivals: Vec<usize> = (0..n).collect();
    arrivals.sort_by_key(|&i| OrderedFloat(processes[i].arrival_time));
    let mut arrivals: VecDeque<usize> = arrivals.into();

    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut current_time = 0.0;
    let mut completed = 0;

    while completed < n {
        admit(processes, &mut arrivals, &mut ready, current_time);

        let Some(i) = ready.pop_front() else {
            match arrivals.front() {
                Some(&next) => {
                    log::trace!(
                        "rr: idle {} -> {}",
                        current_time,
                        processes[next].arrival_time
                    );
                    current_time = processes[next].arrival_time;
                    continue;
                }
                None => break,
            }
        };

        let run = quantum.min(remaining[i]);
        timeline.push(Slice {
            id: processes[i].id,
            start: current_time,
            run,
            remaining_before: remaining[i],
            remaining_after: remaining[i] - run,
        });
        log::trace!(
            "rr: P{} runs {} -> {}, {} left",
            processes[i].id,
            current_time,
            current_time + run,
            remaining[i] - run
        );

        current_time += run;
        remaining[i] -= run;

        // Arrivals during the slice queue ahead of the preempted process
        admit(processes, &mut arrivals, &mut ready, current_time);

        if remaining[i] > 0.0 {
            ready.push_back(i);
        } else {
            let p = &processes[i];
            let turnaround_time = current_time - p.arrival_time;
            results[i] = Some(ScheduleResult {
                id: p.id,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                waiting_time: turnaround_time - p.burst_time,
                turnaround_time,
                priority: None,
            });
            completed += 1;
        }
    }

    Ok(Schedule::new(results.into_iter().flatten().collect(), timeline))
}

fn admit(
    processes: &[Process],
    arrivals: &mut VecDeque<usize>,
    ready: &mut VecDeque<usize>,
    current_time: Ticks,
) {
    while let Some(&next) = arrivals.front() {
        if processes[next].arrival_time > current_time {
            break;
        }
        ready.push_back(next);
        arrivals.pop_front();
    }
}
