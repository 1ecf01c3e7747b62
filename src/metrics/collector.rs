use super::summary::MetricsSummary;
use crate::process::ScheduleResult;

/// Accumulates per-process results into averages
pub struct MetricsCollector {
    waiting_samples: Vec<f64>,
    turnaround_samples: Vec<f64>,
    total_burst_time: f64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            waiting_samples: Vec::new(),
            turnaround_samples: Vec::new(),
            total_burst_time: 0.0,
        }
    }

    pub fn from_results(results: &[ScheduleResult]) -> Self {
        let mut collector = Self::new();
        for result in results {
            collector.record(result);
        }
        collector
    }

    /// Record one finished process
    pub fn record(&mut self, result: &ScheduleResult) {
        self.waiting_samples.push(result.waiting_time);
        self.turnaround_samples.push(result.turnaround_time);
        self.total_burst_time += result.burst_time;
    }

    pub fn num_processes(&self) -> usize {
        self.waiting_samples.len()
    }

    /// Compute final summary statistics. Empty input yields zeros.
    pub fn compute_summary(&self) -> MetricsSummary {
        MetricsSummary {
            num_processes: self.num_processes(),
            avg_waiting_time: mean(&self.waiting_samples),
            avg_turnaround_time: mean(&self.turnaround_samples),
            max_waiting_time: max(&self.waiting_samples),
            max_turnaround_time: max(&self.turnaround_samples),
            total_burst_time: self.total_burst_time,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Arithmetic mean, 0 for no samples
fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn max(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;

    #[test]
    fn test_mean() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(mean(&samples), 3.0);

        let empty: Vec<f64> = vec![];
        assert_eq!(mean(&empty), 0.0);
    }

    #[test]
    fn test_metrics_collector() {
        let results = vec![
            ScheduleResult::from_waiting(&Process::new(1, 0.0, 5.0), 0.0),
            ScheduleResult::from_waiting(&Process::new(2, 0.0, 3.0), 5.0),
            ScheduleResult::from_waiting(&Process::new(3, 0.0, 8.0), 8.0),
        ];
        let summary = MetricsCollector::from_results(&results).compute_summary();

        assert_eq!(summary.num_processes, 3);
        assert_eq!(summary.avg_waiting_time, 13.0 / 3.0);
        assert_eq!(summary.avg_turnaround_time, 29.0 / 3.0);
        assert_eq!(summary.max_waiting_time, 8.0);
        assert_eq!(summary.max_turnaround_time, 16.0);
        assert_eq!(summary.total_burst_time, 16.0);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = MetricsCollector::new().compute_summary();
        assert_eq!(summary.num_processes, 0);
        assert_eq!(summary.avg_waiting_time, 0.0);
        assert_eq!(summary.avg_turnaround_time, 0.0);
        assert_eq!(summary.max_waiting_time, 0.0);
    }
}
