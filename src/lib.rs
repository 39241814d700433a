#![no_std]

mod config;
mod state;
mod filter;
mod knob;
pub mod calibration;
pub mod curves;
pub mod source;
pub mod volume;

pub use config::{Config, ConfigError};
pub use state::FilterState;
pub use filter::AdaptiveFilter;
pub use knob::{PollError, Reading, VolumeKnob};
pub use calibration::{calibrate, CalibrationError, CalibrationReport, Calibrator};
pub use curves::{snap_curve, ResponseCurve};
pub use source::SampleSource;
pub use volume::{VolumeMapping, VolumeSink};
