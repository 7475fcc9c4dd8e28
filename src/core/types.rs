use serde::{Deserialize, Serialize};

/// Pixel coordinate pair delivered by input events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the component along `axis`.
    #[must_use]
    pub fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Sum of absolute per-component deltas to `other`.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> f64 {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }
}

/// Screen-space placement of the host plot component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    #[must_use]
    pub fn origin(self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    /// Corner opposite to the origin.
    #[must_use]
    pub fn far_corner(self) -> ScreenPoint {
        ScreenPoint::new(self.x + self.width, self.y + self.height)
    }

    /// Position of the rect along `axis`.
    #[must_use]
    pub fn position(self, axis: Axis) -> f64 {
        self.origin().component(axis)
    }

    /// Size of the rect along `axis`.
    #[must_use]
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Physical screen axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Position of this axis inside an `(x, y)` pair.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Orientation of the host plot: whether the index axis runs horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Zoom selection mode, fixed when the tool is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// Select a band along a single axis.
    Range,
    /// Select a rectangle and zoom both axes.
    #[default]
    Box,
}

/// Logical plot axis targeted in `ZoomMode::Range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AxisSelector {
    #[default]
    Index,
    Value,
}

/// Data-space pair used for both per-axis bounds and `(x, y)` data points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPair {
    pub x: f64,
    pub y: f64,
}

impl DataPair {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}
