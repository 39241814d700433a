use num_traits::{AsPrimitive, PrimInt};

use crate::config::{Config, ConfigError};
use crate::curves::snap_curve;
use crate::state::FilterState;

/// EMA decay of the tracked error. Part of the tuned feel of the filter.
const ERROR_EMA_DECAY: f32 = 0.4;

/// Snap blend applied while sleeping is enabled: `snap * 0.5 + 0.5`.
const SLEEP_SNAP_BLEND: f32 = 0.5;

/// Adaptive smoothing filter for a single noisy ADC channel.
///
/// The smoothing coefficient follows [`snap_curve`] of the distance between
/// raw input and smoothed output: noise is eased out, real movement is
/// tracked almost immediately. With sleeping enabled the output freezes once
/// the tracked error settles below the activity threshold.
#[derive(Debug, Clone)]
pub struct AdaptiveFilter<T = u16> {
    config: Config,
    state: FilterState,
    _sample: core::marker::PhantomData<T>,
}

impl<T> AdaptiveFilter<T>
where
    T: PrimInt + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: FilterState::default(),
            _sample: core::marker::PhantomData,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_sleeping(&self) -> bool {
        self.state.sleeping
    }

    /// Snap coefficient of the last update that moved the output.
    pub fn snap(&self) -> f32 {
        self.state.last_snap
    }

    /// Current output without feeding a new sample.
    pub fn value(&self) -> T {
        // smooth_value is never negative, so truncation is floor
        self.state.smooth_value.as_()
    }

    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    /// Feed one raw sample, returns the filtered value in `[0, resolution - 1]`.
    ///
    /// Samples outside the input domain are clamped first.
    pub fn update(&mut self, raw: T) -> T {
        let max = self.config.max_value();
        let threshold = self.config.activity_threshold;
        let sleep_enable = self.config.sleep_enable;

        let raw = self.edge_snap(raw.as_().clamp(0.0, max));

        let error = raw - self.state.smooth_value;
        let diff = abs(error);

        self.state.error_ema += (error - self.state.error_ema) * ERROR_EMA_DECAY;

        if sleep_enable {
            let sleeping = abs(self.state.error_ema) < threshold;
            if sleeping != self.state.sleeping {
                log::trace!(
                    "{} at {} (error ema {})",
                    if sleeping { "sleeping" } else { "waking" },
                    self.state.smooth_value,
                    self.state.error_ema
                );
            }
            self.state.sleeping = sleeping;

            if sleeping {
                return self.value();
            }
        }

        let mut snap = snap_curve(diff * self.config.snap_multiplier);
        if sleep_enable {
            // Favour settling on an accurate value before sleep kicks in
            snap = snap * SLEEP_SNAP_BLEND + SLEEP_SNAP_BLEND;
        }

        self.state.smooth_value += error * snap;
        self.state.smooth_value = self.state.smooth_value.clamp(0.0, max);
        self.state.last_snap = snap;

        self.value()
    }

    /// Drag raw values close to either edge further out, so small movements
    /// there still overcome the activity threshold.
    ///
    /// The result may fall outside the input domain; `smooth_value` is clamped
    /// after the EMA step instead.
    fn edge_snap(&self, raw: f32) -> f32 {
        if !(self.config.sleep_enable && self.config.edge_snap_enable) {
            return raw;
        }

        let threshold = self.config.activity_threshold;
        let resolution = self.config.resolution as f32;

        if raw < threshold {
            raw * 2.0 - threshold
        } else if raw > resolution - threshold {
            raw * 2.0 - resolution + threshold
        } else {
            raw
        }
    }
}

#[inline]
fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}
