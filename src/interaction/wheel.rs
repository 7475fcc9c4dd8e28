use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Positive wheel deltas zoom in; zero carries no direction.
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Extent multiplier for one wheel notch.
///
/// Zooming in shrinks the extent by `1 / (1 + step / 2)`; zooming out grows it
/// by `1 + step / 2`.
pub fn wheel_zoom_factor(direction: WheelDirection, wheel_zoom_step: f64) -> ZoomResult<f64> {
    if !wheel_zoom_step.is_finite() || wheel_zoom_step <= 0.0 {
        return Err(ZoomError::InvalidConfig(
            "wheel_zoom_step must be finite and > 0".to_owned(),
        ));
    }
    let growth = 1.0 + 0.5 * wheel_zoom_step;
    Ok(match direction {
        WheelDirection::In => 1.0 / growth,
        WheelDirection::Out => growth,
    })
}

/// Scales `(low, high)` by `factor` while keeping `anchor` fixed.
#[must_use]
pub fn wheel_zoom_bounds(anchor: f64, factor: f64, low: f64, high: f64) -> (f64, f64) {
    (
        anchor - factor * (anchor - low),
        anchor + factor * (high - anchor),
    )
}
