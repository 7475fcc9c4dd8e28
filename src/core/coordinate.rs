use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::mapper::AxisMapper;
use crate::core::types::{Axis, AxisSelector, DataPair, Orientation, ScreenPoint, ZoomMode};

/// One recorded zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomState {
    /// Bounds of the single zoomed axis.
    Range { low: f64, high: f64 },
    /// Per-axis bounds, `low = (x_low, y_low)` and `high = (x_high, y_high)`.
    Box { low: DataPair, high: DataPair },
}

impl ZoomState {
    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        match self {
            Self::Range { .. } => ZoomMode::Range,
            Self::Box { .. } => ZoomMode::Box,
        }
    }

    /// Bounds along `axis`. Range states carry a single axis and ignore it.
    #[must_use]
    pub fn axis_bounds(&self, axis: Axis) -> (f64, f64) {
        match *self {
            Self::Range { low, high } => (low, high),
            Self::Box { low, high } => (low.component(axis), high.component(axis)),
        }
    }
}

/// Resolves which screen axis carries `selector` for the given orientation.
#[must_use]
pub fn resolve_axis(selector: AxisSelector, orientation: Orientation) -> Axis {
    match (selector, orientation) {
        (AxisSelector::Index, Orientation::Horizontal)
        | (AxisSelector::Value, Orientation::Vertical) => Axis::X,
        (AxisSelector::Index, Orientation::Vertical)
        | (AxisSelector::Value, Orientation::Horizontal) => Axis::Y,
    }
}

/// Screen axes touched by a zoom in `mode`.
#[must_use]
pub fn zoom_axes(
    mode: ZoomMode,
    selector: AxisSelector,
    orientation: Orientation,
) -> SmallVec<[Axis; 2]> {
    match mode {
        ZoomMode::Range => smallvec![resolve_axis(selector, orientation)],
        ZoomMode::Box => smallvec![Axis::X, Axis::Y],
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}

/// Maps the `axis` component of a screen segment into ordered data bounds.
#[must_use]
pub fn map_range(
    mapper: &dyn AxisMapper,
    axis: Axis,
    start: ScreenPoint,
    end: ScreenPoint,
) -> (f64, f64) {
    ordered(
        mapper.map_screen_to_data(start.component(axis)),
        mapper.map_screen_to_data(end.component(axis)),
    )
}

/// Maps a screen rectangle into ordered `(low, high)` data corners.
#[must_use]
pub fn map_box(
    x_mapper: &dyn AxisMapper,
    y_mapper: &dyn AxisMapper,
    start: ScreenPoint,
    end: ScreenPoint,
) -> (DataPair, DataPair) {
    let (x_low, x_high) = map_range(x_mapper, Axis::X, start, end);
    let (y_low, y_high) = map_range(y_mapper, Axis::Y, start, end);
    (DataPair::new(x_low, y_low), DataPair::new(x_high, y_high))
}
