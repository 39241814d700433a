use crate::config::ConfigError;
use crate::curves::ResponseCurve;

/// Something that applies a volume level, typically a mixer.
///
/// Failures are the caller's business; the filter never sees them.
pub trait VolumeSink {
    type Error;

    /// `percent` is within `0.0..=100.0`.
    fn set_volume(&mut self, percent: f32) -> Result<(), Self::Error>;
}

/// Maps filtered values to a volume percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeMapping {
    /// Filtered value that corresponds to 100%.
    pub full_scale: f32,

    /// Upper cap of the produced percentage.
    pub max_percent: f32,

    pub curve: ResponseCurve,
}

impl VolumeMapping {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.full_scale > 0.0) {
            return Err(ConfigError::InvalidFullScale);
        }

        if !(self.max_percent > 0.0 && self.max_percent <= 100.0) {
            return Err(ConfigError::InvalidPercentCap);
        }

        Ok(())
    }

    pub fn percentage(&self, value: f32) -> f32 {
        let normalized = (value / self.full_scale).clamp(0.0, 1.0);
        let percent = self.curve.apply(normalized) * 100.0;
        percent.clamp(0.0, self.max_percent)
    }
}

impl Default for VolumeMapping {
    fn default() -> Self {
        Self {
            full_scale: 300.0,
            max_percent: 80.0,
            curve: ResponseCurve::Linear,
        }
    }
}
