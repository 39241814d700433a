//! Curve implementations.
//!
//! [`snap_curve`] drives the adaptive smoothing coefficient, [`ResponseCurve`]
//! shapes normalized (0.0..1.0) values on their way to a volume sink.

/// Map a scaled difference to a smoothing coefficient in `0.0..=1.0`.
///
/// Based on the hyperbola `1 / (x + 1)`, flipped so that `x = 0` gives 0 and
/// large `x` tends towards 1, then doubled and capped. Small differences
/// (noise) barely move the output while medium and large movements are
/// followed almost immediately. Saturates at exactly 1.0 from `x = 1.0` on.
#[inline]
pub fn snap_curve(x: f32) -> f32 {
    let y = 1.0 - 1.0 / (x + 1.0);
    let y = y * 2.0;
    if y > 1.0 { 1.0 } else { y }
}

/// Response curve types for volume output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResponseCurve {
    /// Linear response (1:1 mapping).
    #[default]
    Linear,

    /// Logarithmic response (audio taper).
    ///
    /// Requires `log-curve` feature and `libm` dependency.
    #[cfg(feature = "log-curve")]
    Logarithmic,
}

impl ResponseCurve {
    /// Apply the response curve to a normalized value (0.0..1.0).
    ///
    /// Returns the transformed value, also in the range 0.0..1.0.
    #[inline]
    pub fn apply(&self, normalized: f32) -> f32 {
        match self {
            ResponseCurve::Linear => normalized,

            #[cfg(feature = "log-curve")]
            ResponseCurve::Logarithmic => apply_logarithmic(normalized),
        }
    }
}

/// Apply logarithmic (audio taper) curve.
///
/// output = (e^(3x) - 1) / (e^3 - 1)
///
/// Spreads out the low end so quiet volumes get fine control.
#[cfg(feature = "log-curve")]
#[inline]
fn apply_logarithmic(normalized: f32) -> f32 {
    const E3_MINUS_1: f32 = 19.085_537; // e^3 - 1 precomputed

    let x = normalized.clamp(0.0, 1.0);
    let exp_3x = libm::expf(3.0 * x);

    (exp_3x - 1.0) / E3_MINUS_1
}
