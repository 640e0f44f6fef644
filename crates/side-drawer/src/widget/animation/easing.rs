//! Easing curves for drawer transitions.
//!
//! An easing curve maps linear progress (0.0 to 1.0) to eased progress.

use serde::{Deserialize, Serialize};

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quadratic, starts slow.
    EaseIn,
    /// Quadratic, ends slow.
    EaseOut,
    /// Quadratic, slow at both ends.
    #[default]
    EaseInOut,
    /// Cubic, ends slow. Stronger than [`Easing::EaseOut`].
    EaseOutCubic,
    /// Cubic, slow at both ends. Stronger than [`Easing::EaseInOut`].
    EaseInOutCubic,
}

impl Easing {
    /// Apply the curve to a progress value. Input is clamped to 0.0-1.0.
    ///
    /// ```
    /// use side_drawer::widget::animation::Easing;
    ///
    /// assert_eq!(Easing::Linear.apply(0.5), 0.5);
    /// assert!(Easing::EaseIn.apply(0.5) < 0.5);
    /// assert!(Easing::EaseOut.apply(0.5) > 0.5);
    /// ```
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolate between two values along an easing curve.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * easing.apply(t)
}
