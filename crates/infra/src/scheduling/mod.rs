//! Background scheduling for periodic scan ticks.

mod session_scheduler;

pub use session_scheduler::{SessionScheduler, SessionSchedulerConfig};
