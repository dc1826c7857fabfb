//! Audio playback and capture. The terminal build has no sound device, so the
//! simulated device only tracks whether a take is open.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::bail;

pub trait AudioDevice: Send + Sync {
    fn play(&self, uri: &str) -> anyhow::Result<()>;

    fn start_recording(&self) -> anyhow::Result<()>;

    /// Close the open take and return where it was stored
    fn stop_recording(&self) -> anyhow::Result<String>;
}

#[derive(Debug, Default)]
pub struct SimulatedAudio {
    recording: AtomicBool,
}

impl AudioDevice for SimulatedAudio {
    fn play(&self, uri: &str) -> anyhow::Result<()> {
        tracing::info!(%uri, "playing audio");
        Ok(())
    }

    fn start_recording(&self) -> anyhow::Result<()> {
        if self.recording.swap(true, Ordering::SeqCst) {
            bail!("a recording is already open");
        }
        tracing::debug!("recording started");
        Ok(())
    }

    fn stop_recording(&self) -> anyhow::Result<String> {
        if !self.recording.swap(false, Ordering::SeqCst) {
            bail!("no recording to stop");
        }
        Ok("memory://recording".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_pairs() {
        let audio = SimulatedAudio::default();
        assert!(audio.stop_recording().is_err());
        audio.start_recording().unwrap();
        assert!(audio.start_recording().is_err());
        assert_eq!(audio.stop_recording().unwrap(), "memory://recording");
    }
}
