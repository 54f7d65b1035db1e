//! Clock and duration formatting helpers.

mod format;

pub use format::{format_clock_time, format_wait_time};
