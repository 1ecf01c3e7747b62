use crate::process::{ProcessGenerator, ProcessSpec};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkloadConfig {
    /// Explicit process list, in submission order
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,

    /// Random workload, used when no explicit processes are given
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
}

impl WorkloadConfig {
    /// Explicit processes take precedence over the generator
    pub fn processes(&self) -> Vec<ProcessSpec> {
        if !self.processes.is_empty() {
            return self.processes.clone();
        }
        match &self.generator {
            Some(generator) => ProcessGenerator::new(generator.clone()).generate(),
            None => Vec::new(),
        }
    }
}

fn default_arrival_rate() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Number of processes to generate
    pub num_processes: usize,

    /// Mean arrivals per tick (exponential inter-arrival gaps)
    #[serde(default = "default_arrival_rate")]
    pub arrival_rate: f64,

    /// Burst time distribution
    pub burst_dist: BurstDistribution,

    /// When set, priorities are drawn uniformly from 1..=max_priority
    #[serde(default)]
    pub max_priority: Option<i64>,

    /// Random seed for reproducibility
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BurstDistribution {
    #[serde(rename = "fixed")]
    Fixed { value: u32 },

    #[serde(rename = "uniform")]
    Uniform { min: u32, max: u32 },

    #[serde(rename = "normal")]
    Normal { mean: f64, std_dev: f64 },

    #[serde(rename = "lognormal")]
    LogNormal { mean: f64, std_dev: f64 },
}

impl BurstDistribution {
    /// Sample a burst in whole ticks, at least 1
    pub fn sample<R: rand::Rng>(&self, rng: &mut R) -> u32 {
        use rand_distr::Distribution;

        match self {
            BurstDistribution::Fixed { value } => (*value).max(1),
            BurstDistribution::Uniform { min, max } => {
                rng.gen_range((*min).min(*max)..=(*max).max(*min)).max(1)
            }
            BurstDistribution::Normal { mean, std_dev } => {
                match rand_distr::Normal::new(*mean, *std_dev) {
                    Ok(normal) => normal.sample(rng).round().max(1.0) as u32,
                    Err(_) => mean.round().max(1.0) as u32,
                }
            }
            BurstDistribution::LogNormal { mean, std_dev } => {
                match rand_distr::LogNormal::new(*mean, *std_dev) {
                    Ok(lognormal) => lognormal.sample(rng).round().max(1.0) as u32,
                    Err(_) => mean.exp().round().max(1.0) as u32,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_burst_sample_bounds() {
        let mut rng = StdRng::seed_from_u64(7);

        let fixed = BurstDistribution::Fixed { value: 0 };
        assert_eq!(fixed.sample(&mut rng), 1);

        let uniform = BurstDistribution::Uniform { min: 2, max: 6 };
        for _ in 0..100 {
            let v = uniform.sample(&mut rng);
            assert!((2..=6).contains(&v));
        }

        let normal = BurstDistribution::Normal {
            mean: 1.0,
            std_dev: 5.0,
        };
        for _ in 0..100 {
            assert!(normal.sample(&mut rng) >= 1);
        }
    }

    #[test]
    fn test_explicit_processes_win() {
        let workload: WorkloadConfig = toml::from_str(
            r#"
            processes = [ { arrival_time = 0, burst_time = 5 } ]

            [generator]
            num_processes = 10
            burst_dist = { type = "fixed", value = 3 }
            seed = 1
            "#,
        )
        .unwrap();

        let processes = workload.processes();
        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].burst_time, Some(5.0));
    }

    #[test]
    fn test_generator_used_without_processes() {
        let workload: WorkloadConfig = toml::from_str(
            r#"
            [generator]
            num_processes = 4
            arrival_rate = 0.5
            burst_dist = { type = "uniform", min = 1, max = 8 }
            seed = 3
            "#,
        )
        .unwrap();

        assert_eq!(workload.processes().len(), 4);
    }

    #[test]
    fn test_empty_workload() {
        let workload = WorkloadConfig::default();
        assert!(workload.processes().is_empty());
    }
}
