pub mod scheduler;
pub mod workload;

pub use scheduler::{SchedulerConfig, DEFAULT_QUANTUM};
pub use workload::{BurstDistribution, GeneratorConfig, WorkloadConfig};

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level configuration that aggregates all sub-configs
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl Config {
    /// Load configuration from a TOML file, or JSON when the extension is `.json`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        log::debug!(
            "loaded {:?}: algorithm {}, {} explicit processes",
            path,
            config.scheduler.algorithm,
            config.workload.processes.len()
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(serde_json::from_str(contents)?)
    }
}
