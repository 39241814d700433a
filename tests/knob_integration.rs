use responsive_pot::{
    AdaptiveFilter, Config, ConfigError, PollError, ResponseCurve, VolumeKnob, VolumeMapping,
    VolumeSink,
};

#[derive(Default)]
struct RecordingSink {
    applied: Vec<f32>,
    fail: bool,
}

impl VolumeSink for RecordingSink {
    type Error = &'static str;

    fn set_volume(&mut self, percent: f32) -> Result<(), Self::Error> {
        if self.fail {
            return Err("mixer unavailable");
        }
        self.applied.push(percent);
        Ok(())
    }
}

fn source_from(samples: Vec<u16>) -> impl FnMut() -> Result<u16, &'static str> {
    let mut iter = samples.into_iter();
    move || iter.next().ok_or("source exhausted")
}

fn default_filter() -> AdaptiveFilter<u16> {
    AdaptiveFilter::new(Config::default()).expect("Valid config")
}

#[test]
fn test_sink_driven_once_per_change() {
    let mut samples = vec![150; 20];
    samples.extend(vec![240; 20]);

    let mut knob = VolumeKnob::new(
        source_from(samples),
        RecordingSink::default(),
        default_filter(),
        VolumeMapping::default(),
    )
    .expect("Valid mapping");

    // 150 / 300 = 50%
    let first = knob.poll().expect("Poll");
    assert_eq!(first.value, 150);
    assert_eq!(first.percent, Some(50.0));

    for _ in 1..20 {
        let reading = knob.poll().expect("Poll");
        assert_eq!(reading.percent, None);
    }
    assert_eq!(knob.sink().applied, vec![50.0]);
    assert!(knob.filter().is_sleeping());

    for _ in 0..20 {
        knob.poll().expect("Poll");
    }

    let applied = &knob.sink().applied;
    assert!(applied.len() > 1);
    let last = *applied.last().unwrap();
    assert!(last > 75.0 && last <= 80.0, "Got {}", last);
    assert_eq!(knob.applied(), Some(last));
}

#[test]
fn test_sleeping_never_touches_sink() {
    let mut knob = VolumeKnob::new(
        source_from(vec![150; 30]),
        RecordingSink::default(),
        default_filter(),
        VolumeMapping::default(),
    )
    .expect("Valid mapping");

    let mut sleeping_polls = 0;
    for _ in 0..30 {
        let reading = knob.poll().expect("Poll");
        if reading.sleeping {
            sleeping_polls += 1;
            assert_eq!(reading.percent, None);
        }
    }

    assert!(sleeping_polls > 0);
    assert_eq!(knob.sink().applied.len(), 1);
}

#[test]
fn test_source_error_propagates() {
    let mut knob = VolumeKnob::new(
        source_from(vec![]),
        RecordingSink::default(),
        default_filter(),
        VolumeMapping::default(),
    )
    .expect("Valid mapping");

    assert!(matches!(knob.poll(), Err(PollError::Source("source exhausted"))));
}

#[test]
fn test_sink_error_propagates() {
    let sink = RecordingSink {
        fail: true,
        ..RecordingSink::default()
    };
    let mut knob = VolumeKnob::new(
        source_from(vec![150; 2]),
        sink,
        default_filter(),
        VolumeMapping::default(),
    )
    .expect("Valid mapping");

    assert!(matches!(knob.poll(), Err(PollError::Sink("mixer unavailable"))));
    assert_eq!(knob.applied(), None);
}

#[test]
fn test_invalid_mapping_rejected() {
    let mapping = VolumeMapping {
        full_scale: -1.0,
        max_percent: 80.0,
        curve: ResponseCurve::Linear,
    };

    let result = VolumeKnob::new(
        source_from(vec![]),
        RecordingSink::default(),
        default_filter(),
        mapping,
    );
    assert!(matches!(result, Err(ConfigError::InvalidFullScale)));
}

#[test]
fn test_into_parts_returns_filter_state() {
    let mut knob = VolumeKnob::new(
        source_from(vec![150]),
        RecordingSink::default(),
        default_filter(),
        VolumeMapping::default(),
    )
    .expect("Valid mapping");
    knob.poll().expect("Poll");

    let (_, sink, filter) = knob.into_parts();
    assert_eq!(sink.applied, vec![50.0]);
    assert_eq!(filter.value(), 150);
}
