//! # Slotwatch API
//!
//! Command facade over the monitoring engine. Each command in [`commands`]
//! is one operation a presentation layer can invoke; the [`context`] module
//! wires the engine, scheduler and port implementations together.

pub mod commands;
pub mod config;
pub mod context;
pub mod utils;

pub use config::SlotwatchConfig;
pub use context::AppContext;
