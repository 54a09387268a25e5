//! Text-to-speech collaborator for the drill session.
//!
//! Speech is an injected capability so the review loop never depends on real
//! audio hardware. The system implementation shells out to the platform's
//! speech command and blocks until playback completes; a failure is reported
//! to the caller, which logs it and carries on without audio.

use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no speech command available on this platform")]
    NotSupported,

    #[error("speech command failed: {0}")]
    SpeakFailed(String),
}

/// Capability consumed by the session runner.
pub trait Speaker {
    /// Synthesizes and plays `text`, blocking until playback completes.
    fn speak(&self, text: &str) -> Result<(), AudioError>;
}

/// Speaks through the operating system's text-to-speech command.
pub struct SystemSpeaker;

impl Speaker for SystemSpeaker {
    fn speak(&self, text: &str) -> Result<(), AudioError> {
        let mut command = speech_command(text).ok_or(AudioError::NotSupported)?;
        let status = command
            .status()
            .map_err(|e| AudioError::SpeakFailed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(AudioError::SpeakFailed(format!("exit status {status}")))
        }
    }
}

#[cfg(target_os = "macos")]
fn speech_command(text: &str) -> Option<Command> {
    let mut command = Command::new("say");
    command.arg(text);
    Some(command)
}

#[cfg(target_os = "linux")]
fn speech_command(text: &str) -> Option<Command> {
    let mut command = Command::new("espeak");
    command.arg(text);
    Some(command)
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn speech_command(_text: &str) -> Option<Command> {
    None
}

/// Silent speaker for `--no-audio` runs and tests.
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str) -> Result<(), AudioError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_speaker_always_succeeds() {
        assert!(NullSpeaker.speak("anything").is_ok());
    }

    #[test]
    fn test_audio_error_display() {
        let err = AudioError::SpeakFailed("exit status 1".to_string());
        assert!(err.to_string().contains("exit status 1"));
    }
}
