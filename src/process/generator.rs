use super::ProcessSpec;
use crate::config::GeneratorConfig;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

/// Generates random process lists from a workload configuration
pub struct ProcessGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl ProcessGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Produce `num_processes` descriptors with non-decreasing arrival times.
    /// The same seed always yields the same list.
    pub fn generate(&mut self) -> Vec<ProcessSpec> {
        let mut processes = Vec::with_capacity(self.config.num_processes);
        let mut arrival_time = 0.0;

        for i in 0..self.config.num_processes {
            if i > 0 {
                arrival_time += self.sample_gap();
            }

            let burst_time = self.config.burst_dist.sample(&mut self.rng) as f64;
            let mut spec = ProcessSpec::new(arrival_time, burst_time);

            if let Some(max_priority) = self.config.max_priority {
                spec.priority = Some(self.rng.gen_range(1..=max_priority.max(1)));
            }

            processes.push(spec);
        }

        log::debug!(
            "generated {} processes (seed {})",
            processes.len(),
            self.config.seed
        );
        processes
    }

    /// Exponential inter-arrival gap floored to whole ticks.
    /// A rate that is not a finite positive number puts every arrival at 0.
    fn sample_gap(&mut self) -> f64 {
        let rate = self.config.arrival_rate;
        if !(rate.is_finite() && rate > 0.0) {
            return 0.0;
        }
        match Exp::new(rate) {
            Ok(exp) => exp.sample(&mut self.rng).floor(),
            Err(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BurstDistribution;

    fn test_config(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            num_processes: 20,
            arrival_rate: 0.5,
            burst_dist: BurstDistribution::Uniform { min: 1, max: 10 },
            max_priority: Some(4),
            seed,
        }
    }

    #[test]
    fn test_generator_is_deterministic() {
        let a = ProcessGenerator::new(test_config(42)).generate();
        let b = ProcessGenerator::new(test_config(42)).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_processes_are_valid() {
        let processes = ProcessGenerator::new(test_config(9)).generate();
        assert_eq!(processes.len(), 20);

        assert_eq!(processes[0].arrival_time, Some(0.0));
        for pair in processes.windows(2) {
            assert!(pair[1].arrival_time.unwrap() >= pair[0].arrival_time.unwrap());
        }
        for p in &processes {
            let burst = p.burst_time.unwrap();
            assert!((1.0..=10.0).contains(&burst));
            assert_eq!(burst.fract(), 0.0);
            let priority = p.priority.unwrap();
            assert!((1..=4).contains(&priority));
        }
    }

    #[test]
    fn test_degenerate_arrival_rate_arrives_together() {
        for rate in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let mut config = test_config(5);
            config.num_processes = 3;
            config.arrival_rate = rate;
            let processes = ProcessGenerator::new(config).generate();

            assert!(
                processes.iter().all(|p| p.arrival_time == Some(0.0)),
                "rate {}",
                rate
            );
            let report = crate::simulate(&processes, "fcfs", None).unwrap();
            assert_eq!(report.processes.len(), 3);
        }
    }

    #[test]
    fn test_no_priorities_without_max_priority() {
        let mut config = test_config(1);
        config.max_priority = None;
        let processes = ProcessGenerator::new(config).generate();
        assert!(processes.iter().all(|p| p.priority.is_none()));
    }
}
