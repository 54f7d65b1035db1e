//! # Slotwatch Core
//!
//! Business logic for the simulated appointment-availability monitor.
//!
//! This crate contains:
//! - The session engine state machine and synthetic outcome model
//!   ([`session`])
//! - Port traits separating business logic from infrastructure
//!   ([`session::ports`])
//! - The standalone mock credential validator ([`validation`])
//!
//! Infrastructure implementations of the ports live in `slotwatch-infra`.

pub mod session;
pub mod validation;

pub use session::engine::{SessionEngine, SessionState};
pub use session::outcome::{Outcome, OutcomeTable};
pub use session::ports::{Alert, AlertChannel, AlertSeverity, CredentialVault, SoundPlayer};
pub use validation::ValidationStatus;
