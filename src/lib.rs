pub mod config;
pub mod error;
pub mod metrics;
pub mod process;
pub mod scheduler;
pub mod simulation;

#[cfg(feature = "cli")]
pub mod visualization;

// Re-export key types
pub use config::Config;
pub use error::ScheduleError;
pub use metrics::{MetricsCollector, MetricsSummary};
pub use process::{Process, ProcessSpec, ScheduleResult};
pub use scheduler::{Scheduler, SchedulingPolicy, Timeline};
pub use simulation::{simulate, ScheduleReport, Simulator};
