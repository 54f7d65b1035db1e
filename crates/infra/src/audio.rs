//! Notification sound playback.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use slotwatch_core::SoundPlayer;
use slotwatch_domain::{Result, SlotwatchError};
use tracing::debug;

/// Plays the notification sound by invoking an external player.
///
/// Volume is passed as a percentage argument; players that do not support it
/// simply ignore the extra argument. Playback runs to completion so failures
/// are observable, but callers treat them as best-effort.
pub struct CommandSoundPlayer {
    program: String,
    sound_path: PathBuf,
}

impl CommandSoundPlayer {
    /// Create a player that runs `program <sound_path> <volume>`.
    pub fn new(program: impl Into<String>, sound_path: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), sound_path: sound_path.into() }
    }
}

#[async_trait]
impl SoundPlayer for CommandSoundPlayer {
    async fn play(&self, volume: u8) -> Result<()> {
        debug!(program = %self.program, volume, "playing notification sound");

        let status = tokio::process::Command::new(&self.program)
            .arg(&self.sound_path)
            .arg(volume.to_string())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|error| {
                SlotwatchError::Internal(format!("spawn {}: {error}", self.program))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SlotwatchError::Internal(format!(
                "{} exited with status {status}",
                self.program
            )))
        }
    }
}

/// No-op player for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSoundPlayer;

#[async_trait]
impl SoundPlayer for NullSoundPlayer {
    async fn play(&self, volume: u8) -> Result<()> {
        debug!(volume, "sound playback disabled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn null_player_always_succeeds() {
        assert!(NullSoundPlayer.play(80).await.is_ok());
    }

    #[tokio::test]
    async fn missing_program_is_an_internal_error() {
        let player = CommandSoundPlayer::new("slotwatch-no-such-player", "notification.mp3");
        let err = player.play(80).await.unwrap_err();
        assert!(matches!(err, SlotwatchError::Internal(_)));
    }
}
