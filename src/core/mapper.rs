use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};

/// Persisted low/high setting of an axis range.
///
/// `Auto` follows the data extent; `Value` pins a numeric bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundSetting {
    Auto,
    Value(f64),
}

impl BoundSetting {
    #[must_use]
    pub fn resolve(self, auto_value: f64) -> f64 {
        match self {
            Self::Auto => auto_value,
            Self::Value(value) => value,
        }
    }
}

/// Low/high setting pair for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    pub low: BoundSetting,
    pub high: BoundSetting,
}

impl AxisSettings {
    #[must_use]
    pub const fn new(low: BoundSetting, high: BoundSetting) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub const fn auto() -> Self {
        Self::new(BoundSetting::Auto, BoundSetting::Auto)
    }
}

/// Screen-to-data mapping and visible-range state for one plot axis.
///
/// Implemented by the host plot; the zoom tool never owns a mapper.
pub trait AxisMapper {
    fn map_screen_to_data(&self, screen: f64) -> f64;

    /// Resolved numeric lower bound of the visible range.
    fn low(&self) -> f64;

    /// Resolved numeric upper bound of the visible range.
    fn high(&self) -> f64;

    fn settings(&self) -> AxisSettings;

    fn set_settings(&mut self, settings: AxisSettings);

    /// Pins both bounds to numeric values.
    fn set_bounds(&mut self, low: f64, high: f64);

    fn bounds(&self) -> (f64, f64) {
        (self.low(), self.high())
    }
}

/// Linear mapper between a pixel span and a data range.
///
/// `screen_low` maps to the resolved low bound and `screen_high` to the high
/// bound. A flipped axis is expressed with `screen_low > screen_high`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearAxisMapper {
    screen_low: f64,
    screen_high: f64,
    settings: AxisSettings,
    data_extent: (f64, f64),
}

impl LinearAxisMapper {
    pub fn new(screen_low: f64, screen_high: f64, low: f64, high: f64) -> ZoomResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ZoomError::InvalidMapper(
                "initial bounds must be finite".to_owned(),
            ));
        }
        let mut mapper = Self::auto(screen_low, screen_high)?;
        mapper.settings = AxisSettings::new(BoundSetting::Value(low), BoundSetting::Value(high));
        Ok(mapper)
    }

    /// Builds a mapper whose bounds follow the data extent.
    pub fn auto(screen_low: f64, screen_high: f64) -> ZoomResult<Self> {
        validate_screen_span(screen_low, screen_high)?;
        Ok(Self {
            screen_low,
            screen_high,
            settings: AxisSettings::auto(),
            data_extent: (0.0, 1.0),
        })
    }

    pub fn with_data_extent(mut self, min: f64, max: f64) -> ZoomResult<Self> {
        self.set_data_extent(min, max)?;
        Ok(self)
    }

    /// Replaces the data extent that `Auto` settings resolve against.
    pub fn set_data_extent(&mut self, min: f64, max: f64) -> ZoomResult<()> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(ZoomError::InvalidData(
                "data extent must be ordered and not NaN".to_owned(),
            ));
        }
        self.data_extent = (min, max);
        Ok(())
    }

    #[must_use]
    pub fn data_extent(&self) -> (f64, f64) {
        self.data_extent
    }

    pub fn set_screen_span(&mut self, screen_low: f64, screen_high: f64) -> ZoomResult<()> {
        validate_screen_span(screen_low, screen_high)?;
        self.screen_low = screen_low;
        self.screen_high = screen_high;
        Ok(())
    }

    #[must_use]
    pub fn screen_span(&self) -> (f64, f64) {
        (self.screen_low, self.screen_high)
    }

    #[must_use]
    pub fn map_data_to_screen(&self, value: f64) -> f64 {
        let (low, high) = self.bounds();
        let span = high - low;
        if span == 0.0 {
            return self.screen_low;
        }
        self.screen_low + (value - low) * (self.screen_high - self.screen_low) / span
    }
}

impl AxisMapper for LinearAxisMapper {
    fn map_screen_to_data(&self, screen: f64) -> f64 {
        let (low, high) = self.bounds();
        low + (screen - self.screen_low) * (high - low) / (self.screen_high - self.screen_low)
    }

    fn low(&self) -> f64 {
        self.settings.low.resolve(self.data_extent.0)
    }

    fn high(&self) -> f64 {
        self.settings.high.resolve(self.data_extent.1)
    }

    fn settings(&self) -> AxisSettings {
        self.settings
    }

    fn set_settings(&mut self, settings: AxisSettings) {
        self.settings = settings;
    }

    fn set_bounds(&mut self, low: f64, high: f64) {
        self.settings = AxisSettings::new(BoundSetting::Value(low), BoundSetting::Value(high));
    }
}

fn validate_screen_span(screen_low: f64, screen_high: f64) -> ZoomResult<()> {
    if !screen_low.is_finite() || !screen_high.is_finite() || screen_low == screen_high {
        return Err(ZoomError::InvalidMapper(
            "screen span must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AxisMapper, AxisSettings, BoundSetting, LinearAxisMapper};
    use approx::assert_abs_diff_eq;

    #[test]
    fn maps_screen_span_onto_bounds() {
        let mapper = LinearAxisMapper::new(0.0, 200.0, 0.0, 100.0).expect("mapper");
        assert_abs_diff_eq!(mapper.map_screen_to_data(50.0), 25.0);
        assert_abs_diff_eq!(mapper.map_data_to_screen(25.0), 50.0);
    }

    #[test]
    fn flipped_screen_span_maps_in_reverse() {
        let mapper = LinearAxisMapper::new(100.0, 0.0, 0.0, 10.0).expect("mapper");
        assert_abs_diff_eq!(mapper.map_screen_to_data(0.0), 10.0);
        assert_abs_diff_eq!(mapper.map_screen_to_data(100.0), 0.0);
    }

    #[test]
    fn auto_settings_follow_data_extent() {
        let mut mapper = LinearAxisMapper::auto(0.0, 100.0)
            .expect("mapper")
            .with_data_extent(-5.0, 5.0)
            .expect("extent");
        assert_eq!(mapper.bounds(), (-5.0, 5.0));

        mapper.set_bounds(-1.0, 1.0);
        assert_eq!(mapper.settings().low, BoundSetting::Value(-1.0));

        mapper.set_settings(AxisSettings::auto());
        mapper.set_data_extent(0.0, 50.0).expect("extent");
        assert_eq!(mapper.bounds(), (0.0, 50.0));
    }

    #[test]
    fn resized_screen_span_keeps_bounds() {
        let mut mapper = LinearAxisMapper::new(0.0, 100.0, 0.0, 50.0).expect("mapper");
        mapper.set_screen_span(0.0, 200.0).expect("span");
        assert_eq!(mapper.screen_span(), (0.0, 200.0));
        assert_eq!(mapper.bounds(), (0.0, 50.0));
        assert_abs_diff_eq!(mapper.map_screen_to_data(100.0), 25.0);
        assert!(mapper.set_screen_span(5.0, 5.0).is_err());
    }

    #[test]
    fn zero_screen_span_is_rejected() {
        let err = LinearAxisMapper::new(10.0, 10.0, 0.0, 1.0).expect_err("must fail");
        assert!(format!("{err}").contains("screen span"));
    }
}
