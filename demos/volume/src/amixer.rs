use std::process::{Command, ExitStatus};

use responsive_pot::VolumeSink;

#[derive(Debug, thiserror::Error)]
pub enum AmixerError {
    #[error("failed to run amixer: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("amixer exited with {0}")]
    Failed(ExitStatus),
}

/// Applies volume through `amixer set <control> <n>%`.
pub struct AmixerSink {
    control: String,
}

impl AmixerSink {
    pub fn new(control: impl Into<String>) -> Self {
        Self {
            control: control.into(),
        }
    }
}

impl VolumeSink for AmixerSink {
    type Error = AmixerError;

    fn set_volume(&mut self, percent: f32) -> Result<(), AmixerError> {
        let status = Command::new("amixer")
            .args(["-q", "set", &self.control, &format!("{:.0}%", percent)])
            .status()?;

        if !status.success() {
            return Err(AmixerError::Failed(status));
        }
        Ok(())
    }
}

/// Only reports what it would do.
pub struct LogSink;

impl VolumeSink for LogSink {
    type Error = std::convert::Infallible;

    fn set_volume(&mut self, percent: f32) -> Result<(), Self::Error> {
        log::info!("volume -> {:.1}%", percent);
        Ok(())
    }
}
