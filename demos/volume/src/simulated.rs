//! A pot that is not there: a wiper position plus ADC noise.

use std::convert::Infallible;

use rand::rngs::ThreadRng;
use rand_distr::{Distribution, Normal};
use responsive_pot::SampleSource;

pub struct SimulatedPot {
    position: f32,
    resolution: u32,
    noise: Normal<f32>,
    rng: ThreadRng,
}

impl SimulatedPot {
    /// `noise_counts` is the standard deviation of the ADC noise in raw counts.
    pub fn new(resolution: u32, noise_counts: f32) -> anyhow::Result<Self> {
        Ok(Self {
            position: 0.0,
            resolution,
            noise: Normal::new(0.0, noise_counts)?,
            rng: rand::rng(),
        })
    }

    /// Wiper position, 0.0..1.0.
    pub fn set_position(&mut self, position: f32) {
        self.position = position.clamp(0.0, 1.0);
    }
}

impl SampleSource<u16> for SimulatedPot {
    type Error = Infallible;

    fn read(&mut self) -> Result<u16, Infallible> {
        let max = (self.resolution - 1) as f32;
        let ideal = self.position * max;
        let noisy = ideal + self.noise.sample(&mut self.rng);
        Ok(noisy.round().clamp(0.0, max) as u16)
    }
}

/// Wiper position for `tick` of `ticks`: hold, sweep up, hold, sweep back down.
pub fn sweep_position(tick: usize, ticks: usize) -> f32 {
    let quarter = (ticks / 4).max(1);
    let phase = tick / quarter;
    let t = (tick % quarter) as f32 / quarter as f32;

    match phase {
        0 => 0.2,
        1 => 0.2 + 0.6 * t,
        2 => 0.8,
        _ => 0.8 - 0.6 * t,
    }
}
