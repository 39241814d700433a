//! Drives a volume control from a (simulated) noisy pot.
//!
//! ```text
//! volume-knob calibrate <angle>       sweep the pot held at <angle> degrees
//! volume-knob run [--amixer] [ticks]  filter a simulated sweep into a sink
//! ```

mod amixer;
mod simulated;

use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use responsive_pot::calibration::{DEFAULT_INTERVAL_MS, DEFAULT_SAMPLES};
use responsive_pot::{calibrate, AdaptiveFilter, Config, VolumeKnob, VolumeMapping, VolumeSink};

use amixer::{AmixerSink, LogSink};
use simulated::{sweep_position, SimulatedPot};

/// Rotation of a typical carbon pot.
const POT_DEGREES: f32 = 300.0;

/// Standard deviation of the simulated ADC noise, raw counts.
const NOISE_COUNTS: f32 = 3.0;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("calibrate") => {
            let angle: f32 = args
                .get(1)
                .context("calibrate needs the pot angle in degrees")?
                .parse()
                .context("angle must be a number")?;
            run_calibration(angle)
        }
        Some("run") => {
            let amixer = args.iter().any(|a| a == "--amixer");
            let ticks = match args.iter().skip(1).find(|a| *a != "--amixer") {
                Some(ticks) => ticks.parse().context("ticks must be a positive integer")?,
                None => 200,
            };

            if amixer {
                run(AmixerSink::new("Master"), ticks, Duration::from_millis(500))
            } else {
                run(LogSink, ticks, Duration::from_millis(20))
            }
        }
        _ => bail!("usage: volume-knob calibrate <angle> | volume-knob run [--amixer] [ticks]"),
    }
}

fn run_calibration(angle: f32) -> Result<()> {
    let config = Config::default();
    let mut pot = SimulatedPot::new(config.resolution, NOISE_COUNTS)?;
    pot.set_position(angle / POT_DEGREES);

    let interval = Duration::from_millis(DEFAULT_INTERVAL_MS.into());
    let report = calibrate::<u16, _, _>(&mut pot, DEFAULT_SAMPLES, || thread::sleep(interval))
        .context("calibration sweep failed")?;

    let (min, max) = report.normalized(config.resolution);
    println!(
        "angle {}: min_val {:.3}, max_val {:.3} (jitter {} counts over {} samples)",
        angle,
        min,
        max,
        report.span(),
        report.samples
    );
    Ok(())
}

fn run<K>(sink: K, ticks: usize, interval: Duration) -> Result<()>
where
    K: VolumeSink,
    K::Error: std::error::Error + Send + Sync + 'static,
{
    let config = Config::default();
    let pot = SimulatedPot::new(config.resolution, NOISE_COUNTS)?;
    let filter = AdaptiveFilter::<u16>::new(config)?;
    let mapping = VolumeMapping {
        full_scale: config.max_value(),
        ..VolumeMapping::default()
    };

    let mut knob = VolumeKnob::new(pot, sink, filter, mapping)?;

    for tick in 0..ticks {
        knob.source_mut().set_position(sweep_position(tick, ticks));
        let reading = knob.poll()?;

        log::debug!(
            "raw {:4}, filtered {:4}, snap {:.2}, error ema {:.2}, sleeping {}",
            reading.raw,
            reading.value,
            reading.snap,
            knob.filter().state().error_ema,
            reading.sleeping
        );

        thread::sleep(interval);
    }

    match knob.applied() {
        Some(percent) => log::info!("final volume {:.1}%", percent),
        None => log::info!("volume never changed"),
    }
    Ok(())
}
