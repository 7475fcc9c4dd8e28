use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};

/// Absolute tolerance used when deciding that an extent collapsed to zero.
pub const EXTENT_ZERO_TOLERANCE: f64 = 1e-8;

/// Default cap for both zoom directions.
pub const DEFAULT_MAX_ZOOM_FACTOR: f64 = 1e5;

/// Upper bound for how far a single zoom direction may go.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomFactorLimit {
    Bounded(f64),
    Unbounded,
}

impl ZoomFactorLimit {
    #[must_use]
    pub fn exceeded_by(self, factor: f64) -> bool {
        match self {
            Self::Bounded(max) => factor > max,
            Self::Unbounded => false,
        }
    }

    pub fn validate(self, name: &str) -> ZoomResult<Self> {
        if let Self::Bounded(max) = self {
            if !max.is_finite() || max <= 0.0 {
                return Err(ZoomError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for ZoomFactorLimit {
    fn default() -> Self {
        Self::Bounded(DEFAULT_MAX_ZOOM_FACTOR)
    }
}

/// Zoom-in/zoom-out caps relative to the original extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ZoomLimits {
    #[serde(default)]
    pub max_zoom_in_factor: ZoomFactorLimit,
    #[serde(default)]
    pub max_zoom_out_factor: ZoomFactorLimit,
}

impl ZoomLimits {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_zoom_in_factor: ZoomFactorLimit::Unbounded,
            max_zoom_out_factor: ZoomFactorLimit::Unbounded,
        }
    }

    #[must_use]
    pub fn with_max_zoom_in(mut self, limit: ZoomFactorLimit) -> Self {
        self.max_zoom_in_factor = limit;
        self
    }

    #[must_use]
    pub fn with_max_zoom_out(mut self, limit: ZoomFactorLimit) -> Self {
        self.max_zoom_out_factor = limit;
        self
    }

    pub fn validate(self) -> ZoomResult<Self> {
        self.max_zoom_in_factor.validate("max_zoom_in_factor")?;
        self.max_zoom_out_factor.validate("max_zoom_out_factor")?;
        Ok(self)
    }

    /// See [`is_zoom_limited`].
    #[must_use]
    pub fn is_limited(self, original: (f64, f64), candidate: (f64, f64)) -> bool {
        is_zoom_limited(
            original.0,
            original.1,
            candidate.0,
            candidate.1,
            self.max_zoom_in_factor,
            self.max_zoom_out_factor,
        )
    }
}

#[must_use]
fn is_near_zero(value: f64) -> bool {
    value.abs() <= EXTENT_ZERO_TOLERANCE
}

/// Returns `true` when moving from the original extent to the candidate
/// extent would exceed either zoom cap and must be rejected.
///
/// An infinite original extent never limits. A collapsed original or
/// candidate extent always limits.
#[must_use]
pub fn is_zoom_limited(
    orig_low: f64,
    orig_high: f64,
    new_low: f64,
    new_high: f64,
    max_zoom_in: ZoomFactorLimit,
    max_zoom_out: ZoomFactorLimit,
) -> bool {
    let orig_extent = orig_high - orig_low;
    if orig_extent.is_infinite() {
        return false;
    }
    if is_near_zero(orig_extent) {
        return true;
    }

    let new_extent = new_high - new_low;
    if is_near_zero(new_extent) {
        return true;
    }

    let zoom_out_factor = new_extent / orig_extent;
    let zoom_in_factor = orig_extent / new_extent;
    max_zoom_out.exceeded_by(zoom_out_factor) || max_zoom_in.exceeded_by(zoom_in_factor)
}

#[cfg(test)]
mod tests {
    use super::{ZoomFactorLimit, ZoomLimits, is_zoom_limited};

    const IN_2: ZoomFactorLimit = ZoomFactorLimit::Bounded(2.0);
    const OUT_3: ZoomFactorLimit = ZoomFactorLimit::Bounded(3.0);

    #[test]
    fn zoom_within_both_caps_is_accepted() {
        assert!(!is_zoom_limited(0.0, 100.0, 20.0, 80.0, IN_2, OUT_3));
        assert!(!is_zoom_limited(0.0, 100.0, -50.0, 150.0, IN_2, OUT_3));
    }

    #[test]
    fn zoom_in_past_cap_is_limited() {
        assert!(is_zoom_limited(0.0, 100.0, 45.0, 55.0, IN_2, OUT_3));
    }

    #[test]
    fn zoom_out_past_cap_is_limited() {
        assert!(is_zoom_limited(0.0, 100.0, -200.0, 200.0, IN_2, OUT_3));
    }

    #[test]
    fn factor_equal_to_cap_is_accepted() {
        assert!(!is_zoom_limited(0.0, 100.0, 25.0, 75.0, IN_2, OUT_3));
    }

    #[test]
    fn infinite_original_extent_never_limits() {
        assert!(!is_zoom_limited(
            f64::NEG_INFINITY,
            f64::INFINITY,
            1.0,
            1.000_001,
            IN_2,
            OUT_3
        ));
    }

    #[test]
    fn degenerate_extents_are_always_limited() {
        let unbounded = ZoomFactorLimit::Unbounded;
        assert!(is_zoom_limited(5.0, 5.0, 0.0, 10.0, unbounded, unbounded));
        assert!(is_zoom_limited(0.0, 10.0, 3.0, 3.0, unbounded, unbounded));
    }

    #[test]
    fn limits_validate_bounded_factors() {
        let limits = ZoomLimits::default().with_max_zoom_in(ZoomFactorLimit::Bounded(0.0));
        let err = limits.validate().expect_err("zero factor must fail");
        assert!(format!("{err}").contains("max_zoom_in_factor"));

        assert!(ZoomLimits::unbounded().validate().is_ok());
    }
}
