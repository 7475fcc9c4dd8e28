pub mod coordinate;
pub mod history;
pub mod keys;
pub mod mapper;
pub mod types;
pub mod zoom_limit;

pub use coordinate::{ZoomState, map_box, map_range, resolve_axis, zoom_axes};
pub use history::{HistoryHooks, HistoryKeys, HistoryNavigation, HistoryStack};
pub use keys::{KeyModifiers, KeyPress, KeySpec};
pub use mapper::{AxisMapper, AxisSettings, BoundSetting, LinearAxisMapper};
pub use types::{Axis, AxisSelector, DataPair, Orientation, ScreenPoint, ScreenRect, ZoomMode};
pub use zoom_limit::{ZoomFactorLimit, ZoomLimits, is_zoom_limited};
