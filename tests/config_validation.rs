use responsive_pot::{AdaptiveFilter, Config, ConfigError, ResponseCurve, VolumeMapping};

#[test]
fn test_zero_resolution() {
    let config = Config {
        resolution: 0,
        ..Config::default()
    };

    let result = AdaptiveFilter::<u16>::new(config);
    assert!(matches!(result, Err(ConfigError::InvalidResolution)));
}

#[test]
fn test_negative_threshold() {
    let config = Config {
        activity_threshold: -1.0,
        ..Config::default()
    };

    let result = AdaptiveFilter::<u16>::new(config);
    assert!(matches!(result, Err(ConfigError::InvalidThreshold)));
}

#[test]
fn test_threshold_at_resolution() {
    let config = Config {
        resolution: 1024,
        activity_threshold: 1024.0,
        ..Config::default()
    };

    let result = AdaptiveFilter::<u16>::new(config);
    assert!(matches!(result, Err(ConfigError::InvalidThreshold)));
}

#[test]
fn test_zero_threshold_is_valid() {
    let config = Config {
        activity_threshold: 0.0,
        ..Config::default()
    };

    assert!(AdaptiveFilter::<u16>::new(config).is_ok());
}

#[test]
fn test_invalid_multiplier() {
    for snap_multiplier in [0.0, -0.01, 1.5] {
        let config = Config {
            snap_multiplier,
            ..Config::default()
        };

        let result = AdaptiveFilter::<u16>::new(config);
        assert!(
            matches!(result, Err(ConfigError::InvalidMultiplier)),
            "multiplier {} accepted",
            snap_multiplier
        );
    }
}

#[test]
fn test_multiplier_of_one_is_valid() {
    let config = Config {
        snap_multiplier: 1.0,
        ..Config::default()
    };

    assert!(AdaptiveFilter::<u16>::new(config).is_ok());
}

#[test]
fn test_invalid_percent_cap() {
    for max_percent in [0.0, 100.5] {
        let mapping = VolumeMapping {
            full_scale: 300.0,
            max_percent,
            curve: ResponseCurve::Linear,
        };

        assert_eq!(mapping.validate(), Err(ConfigError::InvalidPercentCap));
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::InvalidResolution.to_string(),
        "resolution must be greater than zero"
    );
    assert_eq!(
        ConfigError::InvalidMultiplier.to_string(),
        "snap_multiplier must be in range (0.0, 1.0]"
    );
}
