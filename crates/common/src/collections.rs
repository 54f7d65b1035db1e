//! Bounded collections used by the activity feed.

mod history_buffer;

pub use history_buffer::HistoryBuffer;
