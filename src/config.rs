#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidResolution,
    InvalidThreshold,
    InvalidMultiplier,
    InvalidFullScale,
    InvalidPercentCap,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidResolution => write!(f, "resolution must be greater than zero"),
            ConfigError::InvalidThreshold => {
                write!(f, "activity_threshold must be in range [0, resolution)")
            }
            ConfigError::InvalidMultiplier => write!(f, "snap_multiplier must be in range (0.0, 1.0]"),
            ConfigError::InvalidFullScale => write!(f, "full_scale must be greater than zero"),
            ConfigError::InvalidPercentCap => write!(f, "max_percent must be in range (0.0, 100.0]"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Tuning of an [`AdaptiveFilter`](crate::AdaptiveFilter).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Size of the input domain: largest raw sample + 1 (4096 for a 12-bit ADC).
    pub resolution: u32,

    /// Scales the raw difference before it goes through the snap curve.
    /// Smaller eases slower, larger is snappier but lets more noise through.
    pub snap_multiplier: f32,

    /// Freeze the output while the tracked error stays below `activity_threshold`.
    pub sleep_enable: bool,

    /// Exaggerate movement close to either end of the range so the output can
    /// reach the extremes while sleeping is enabled.
    pub edge_snap_enable: bool,

    /// Sustained error (raw units) required to wake up.
    pub activity_threshold: f32,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolution == 0 {
            return Err(ConfigError::InvalidResolution);
        }

        // Written so that NaN fails as well
        if !(self.activity_threshold >= 0.0 && self.activity_threshold < self.resolution as f32) {
            return Err(ConfigError::InvalidThreshold);
        }

        if !(self.snap_multiplier > 0.0 && self.snap_multiplier <= 1.0) {
            return Err(ConfigError::InvalidMultiplier);
        }

        Ok(())
    }

    /// Largest value the filter will ever output.
    pub fn max_value(&self) -> f32 {
        (self.resolution - 1) as f32
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: 4096,
            snap_multiplier: 0.01,
            sleep_enable: true,
            edge_snap_enable: true,
            activity_threshold: 4.0,
        }
    }
}
