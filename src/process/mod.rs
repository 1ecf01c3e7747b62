pub mod generator;
pub mod process;
pub mod result;

pub use generator::ProcessGenerator;
pub use process::{assign_ids, Priority, Process, ProcessId, ProcessSpec, Ticks};
pub use result::{sort_by_id, ScheduleResult};
