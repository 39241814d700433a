/// Mutable state of an [`AdaptiveFilter`](crate::AdaptiveFilter).
///
/// Only the filter writes to it; callers get a shared reference for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterState {
    /// Current smoothed estimate, always within `[0, resolution - 1]`.
    pub smooth_value: f32,

    /// EMA of `raw - smooth_value`, used to detect sustained drift.
    pub error_ema: f32,

    /// Output is frozen while true.
    pub sleeping: bool,

    /// Snap coefficient used by the last moving update.
    pub last_snap: f32,
}
