//! Offline calibration helpers.
//!
//! Sweeps a source over a short window and records the observed extremes.
//! Holding the pot still gives the jitter; repeating at several angles shows
//! the taper of the pot.

use num_traits::{AsPrimitive, PrimInt};

use crate::source::SampleSource;

/// Sample count of a standard bench sweep.
pub const DEFAULT_SAMPLES: usize = 100;

/// Delay between samples of a standard bench sweep.
pub const DEFAULT_INTERVAL_MS: u32 = 20;

#[derive(Debug, PartialEq)]
pub enum CalibrationError<E> {
    /// A sweep needs at least one sample.
    NoSamples,
    Source(E),
}

impl<E: core::fmt::Display> core::fmt::Display for CalibrationError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalibrationError::NoSamples => write!(f, "calibration needs at least one sample"),
            CalibrationError::Source(e) => write!(f, "sample source failed: {}", e),
        }
    }
}

impl<E: core::fmt::Debug + core::fmt::Display> core::error::Error for CalibrationError<E> {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationReport<T> {
    pub min: T,
    pub max: T,
    pub samples: usize,
}

impl<T> CalibrationReport<T>
where
    T: PrimInt + AsPrimitive<f32>,
{
    /// Observed spread, i.e. the jitter when the pot was held still.
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Extremes as fractions of the input domain.
    pub fn normalized(&self, resolution: u32) -> (f32, f32) {
        let r = resolution as f32;
        (self.min.as_() / r, self.max.as_() / r)
    }
}

/// Running min/max tracker.
#[derive(Debug, Clone, Copy)]
pub struct Calibrator<T> {
    min: Option<T>,
    max: Option<T>,
    samples: usize,
}

impl<T> Calibrator<T>
where
    T: PrimInt + AsPrimitive<f32> + core::fmt::Display,
{
    pub const fn new() -> Self {
        Self {
            min: None,
            max: None,
            samples: 0,
        }
    }

    pub fn observe(&mut self, sample: T) {
        self.samples += 1;

        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                if sample < min {
                    log::debug!("new min is {}", sample);
                    self.min = Some(sample);
                }
                if sample > max {
                    log::debug!("new max is {}", sample);
                    self.max = Some(sample);
                }
            }
            _ => {
                log::debug!("init min and max with {}", sample);
                self.min = Some(sample);
                self.max = Some(sample);
            }
        }
    }

    /// `None` until at least one sample was observed.
    pub fn report(&self) -> Option<CalibrationReport<T>> {
        Some(CalibrationReport {
            min: self.min?,
            max: self.max?,
            samples: self.samples,
        })
    }
}

impl<T> Default for Calibrator<T>
where
    T: PrimInt + AsPrimitive<f32> + core::fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Poll `source` `samples` times, calling `between` after every read.
///
/// `between` is where the caller waits; the crate has no notion of time.
pub fn calibrate<T, S, F>(
    source: &mut S,
    samples: usize,
    mut between: F,
) -> Result<CalibrationReport<T>, CalibrationError<S::Error>>
where
    T: PrimInt + AsPrimitive<f32> + core::fmt::Display,
    S: SampleSource<T>,
    F: FnMut(),
{
    if samples == 0 {
        return Err(CalibrationError::NoSamples);
    }

    let step = (samples / 10).max(1);
    let mut calibrator = Calibrator::new();
    for i in 0..samples {
        let sample = source.read().map_err(CalibrationError::Source)?;
        calibrator.observe(sample);

        if i % step == 0 {
            log::info!("calibration {}%", i * 100 / samples);
        }
        between();
    }

    calibrator.report().ok_or(CalibrationError::NoSamples)
}
