//! Shared helpers for the command facade.

pub mod logging;
