//! Tests for the validated configuration groups.

use super::*;

/// Ensures default groups are sane.
///
/// # Examples
/// ```
/// use config::constants::TessellationConfig;
/// let cfg = TessellationConfig::default();
/// assert!(cfg.segments_around > 0);
/// ```
#[test]
fn default_groups_are_valid() {
    let tessellation = TessellationConfig::default();
    assert!(tessellation.segments_around > 0);
    assert!(tessellation.segments_down > 0);

    let pulse = PulseConfig::default();
    assert!(pulse.min_scale > 0.0);
    assert!(pulse.max_scale >= pulse.min_scale);
}

/// Validates the constructors reject invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        TessellationConfig::new(4, 0).unwrap_err(),
        ConfigError::InvalidSegments {
            segments_around: 4,
            segments_down: 0
        }
    );
    assert_eq!(
        PulseConfig::new(0.0, 1.0).unwrap_err(),
        ConfigError::InvalidScaleRange {
            min_scale: 0.0,
            max_scale: 1.0
        }
    );
    assert!(PulseConfig::new(f32::NAN, 1.0).is_err());
    assert!(PulseConfig::new(1.0, f32::NAN).is_err());
    assert!(PulseConfig::new(-1.0, 1.0).is_err());
    assert!(PulseConfig::new(1.0, 1.0).is_ok());
}

#[test]
fn errors_render_readable_messages() {
    let err = TessellationConfig::new(0, 0).unwrap_err();
    assert!(err.to_string().contains("segments must be positive"));

    let err = PulseConfig::new(2.0, 1.0).unwrap_err();
    assert!(err.to_string().contains("min=2"));
}
