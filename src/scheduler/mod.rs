pub mod fcfs;
pub mod policy;
pub mod priority;
pub mod round_robin;
pub mod scheduler;
pub mod sjf;
pub mod timeline;

pub use policy::SchedulingPolicy;
pub use scheduler::Scheduler;
pub use timeline::{Schedule, Slice, Timeline};
