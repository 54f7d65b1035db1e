//! # Slotwatch Infra
//!
//! Infrastructure implementations of the `slotwatch-core` ports:
//! - [`scheduling`] - background scan pacing with cancellation
//! - [`storage`] - file-backed credential vault
//! - [`alerts`] - tracing-backed alert delivery
//! - [`audio`] - notification sound playback

pub mod alerts;
pub mod audio;
pub mod scheduling;
pub mod storage;

pub use alerts::TracingAlertChannel;
pub use audio::{CommandSoundPlayer, NullSoundPlayer};
pub use scheduling::{SessionScheduler, SessionSchedulerConfig};
pub use storage::FileVault;
