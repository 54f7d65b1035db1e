//! # Slotwatch Common
//!
//! Foundation utilities shared across the workspace.
//!
//! This crate contains:
//! - Bounded, newest-first history storage ([`collections::HistoryBuffer`])
//! - A standalone retry/backoff primitive ([`resilience`])
//! - Clock and wait-time formatting helpers ([`time`])
//!
//! ## Architecture
//! - No dependencies on other slotwatch crates
//! - Only external dependencies allowed

pub mod collections;
pub mod resilience;
pub mod time;

pub use collections::HistoryBuffer;
pub use resilience::{retry_with_backoff, RetryConfig, RetryError};
