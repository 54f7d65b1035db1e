//! Resilience primitives.
//!
//! Currently limited to [`retry_with_backoff`], an exponential-backoff retry
//! executor. The simulated scan loop never calls it; it is the reusable
//! building block for a replacement that talks to a real backend.

mod retry;

pub use retry::{retry_with_backoff, RetryConfig, RetryError};
