pub mod report;
pub mod simulator;

pub use report::ScheduleReport;
pub use simulator::{simulate, Simulator};
