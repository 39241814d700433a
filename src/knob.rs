use num_traits::{AsPrimitive, PrimInt};

use crate::config::ConfigError;
use crate::filter::AdaptiveFilter;
use crate::source::SampleSource;
use crate::volume::{VolumeMapping, VolumeSink};

#[derive(Debug, PartialEq)]
pub enum PollError<SE, KE> {
    Source(SE),
    Sink(KE),
}

impl<SE: core::fmt::Display, KE: core::fmt::Display> core::fmt::Display for PollError<SE, KE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PollError::Source(e) => write!(f, "sample source failed: {}", e),
            PollError::Sink(e) => write!(f, "volume sink failed: {}", e),
        }
    }
}

impl<SE, KE> core::error::Error for PollError<SE, KE>
where
    SE: core::fmt::Debug + core::fmt::Display,
    KE: core::fmt::Debug + core::fmt::Display,
{
}

/// Outcome of one [`VolumeKnob::poll`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading<T> {
    pub raw: T,
    pub value: T,
    /// Percentage handed to the sink, `None` if the sink was not called.
    pub percent: Option<f32>,
    pub sleeping: bool,
    pub snap: f32,
}

/// A pot driving a volume control: source -> filter -> mapping -> sink.
///
/// The sink is only driven while the filter is awake, and only when the
/// percentage differs from the last one applied.
pub struct VolumeKnob<S, K, T = u16> {
    source: S,
    sink: K,
    filter: AdaptiveFilter<T>,
    mapping: VolumeMapping,
    applied: Option<f32>,
}

impl<S, K, T> VolumeKnob<S, K, T>
where
    S: SampleSource<T>,
    K: VolumeSink,
    T: PrimInt + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    pub fn new(
        source: S,
        sink: K,
        filter: AdaptiveFilter<T>,
        mapping: VolumeMapping,
    ) -> Result<Self, ConfigError> {
        mapping.validate()?;
        Ok(Self {
            source,
            sink,
            filter,
            mapping,
            applied: None,
        })
    }

    pub fn filter(&self) -> &AdaptiveFilter<T> {
        &self.filter
    }

    pub fn mapping(&self) -> &VolumeMapping {
        &self.mapping
    }

    /// Last percentage the sink accepted.
    pub fn applied(&self) -> Option<f32> {
        self.applied
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_parts(self) -> (S, K, AdaptiveFilter<T>) {
        (self.source, self.sink, self.filter)
    }

    /// Take one sample and push the resulting volume if anything changed.
    pub fn poll(&mut self) -> Result<Reading<T>, PollError<S::Error, K::Error>> {
        let raw = self.source.read().map_err(PollError::Source)?;
        let value = self.filter.update(raw);

        let mut reading = Reading {
            raw,
            value,
            percent: None,
            sleeping: self.filter.is_sleeping(),
            snap: self.filter.snap(),
        };

        if reading.sleeping {
            return Ok(reading);
        }

        let percent = self.mapping.percentage(value.as_());
        if self.applied == Some(percent) {
            return Ok(reading);
        }

        self.sink.set_volume(percent).map_err(PollError::Sink)?;
        log::debug!("volume {}% (value {})", percent, value.as_());
        self.applied = Some(percent);
        reading.percent = Some(percent);

        Ok(reading)
    }
}
