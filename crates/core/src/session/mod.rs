//! Monitoring session state machine and synthetic event generation.
//!
//! Everything here is simulation scaffolding: outcomes are drawn from a
//! weighted random table, not observed from any real backend. The engine is
//! deliberately synchronous at heart: the only suspension points are the
//! port calls (vault writes, alerts, sound) and the tick pacing handled by
//! the scheduler in `slotwatch-infra`.

pub mod engine;
pub mod outcome;
pub mod ports;
