//! Gesture-driven zoom interaction.
//!
//! The host plot implements [`PlotSurface`] and its input dispatch implements
//! [`PointerWindow`]; [`ZoomTool`] consumes [`ToolEvent`]s against both.

mod headless;
mod targeting;
mod wheel;
mod zoom_tool;

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::core::{
    Axis, AxisMapper, AxisSelector, KeyPress, Orientation, ScreenPoint, ScreenRect, resolve_axis,
};

pub use headless::{HeadlessPlot, HeadlessWindow};
pub use targeting::{OriginalSettings, ZoomTargeting};
pub use wheel::{WheelDirection, wheel_zoom_bounds, wheel_zoom_factor};
pub use zoom_tool::ZoomTool;

/// Gesture state of the zoom tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ToolState {
    #[default]
    Normal,
    Selecting,
}

/// Transient drag state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSession {
    pub state: ToolState,
    pub start: Option<ScreenPoint>,
    pub end: Option<ScreenPoint>,
}

impl GestureSession {
    #[must_use]
    pub fn is_selecting(self) -> bool {
        self.state == ToolState::Selecting
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CursorIcon {
    #[default]
    Arrow,
    Magnifier,
}

/// Identity of an interactive tool attached to a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolId(u64);

static NEXT_TOOL_ID: AtomicU64 = AtomicU64::new(1);

impl ToolId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Allocates a process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_TOOL_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Ownership token for the plot's single "active tool" position.
///
/// A tool claims the slot before it arms or starts a gesture and releases it
/// when it disarms or the gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveToolSlot {
    holder: Option<ToolId>,
}

impl ActiveToolSlot {
    #[must_use]
    pub fn holder(&self) -> Option<ToolId> {
        self.holder
    }

    #[must_use]
    pub fn is_held_by(&self, tool: ToolId) -> bool {
        self.holder == Some(tool)
    }

    /// Takes the slot when it is free or already held by `tool`.
    pub fn claim(&mut self, tool: ToolId) -> bool {
        match self.holder {
            None => {
                self.holder = Some(tool);
                true
            }
            Some(holder) => holder == tool,
        }
    }

    /// Frees the slot if `tool` holds it.
    pub fn release(&mut self, tool: ToolId) -> bool {
        if self.is_held_by(tool) {
            self.holder = None;
            return true;
        }
        false
    }
}

/// Host plot capabilities the zoom tool operates on.
pub trait PlotSurface {
    fn orientation(&self) -> Orientation;

    /// Screen placement of the plot component.
    fn screen_rect(&self) -> ScreenRect;

    fn mapper(&self, axis: Axis) -> &dyn AxisMapper;

    fn mapper_mut(&mut self, axis: Axis) -> &mut dyn AxisMapper;

    fn active_tool_slot(&mut self) -> &mut ActiveToolSlot;

    fn request_redraw(&mut self);

    /// Mapper of a logical axis. Override to point range zooms elsewhere.
    fn mapper_for(&self, selector: AxisSelector) -> &dyn AxisMapper {
        self.mapper(resolve_axis(selector, self.orientation()))
    }

    fn mapper_for_mut(&mut self, selector: AxisSelector) -> &mut dyn AxisMapper {
        let axis = resolve_axis(selector, self.orientation());
        self.mapper_mut(axis)
    }
}

/// Pointer capture and cursor primitives owned by the input dispatch.
pub trait PointerWindow {
    fn set_cursor(&mut self, cursor: CursorIcon);

    fn capture_owner(&self) -> Option<ToolId>;

    fn set_capture(&mut self, owner: Option<ToolId>);
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolEventKind {
    ButtonDown {
        button: PointerButton,
        position: ScreenPoint,
    },
    ButtonUp {
        button: PointerButton,
        position: ScreenPoint,
    },
    PointerMove {
        position: ScreenPoint,
    },
    PointerLeave,
    /// Positive `delta` scrolls "up" and zooms in.
    Wheel {
        delta: f64,
        position: ScreenPoint,
    },
    KeyPress(KeyPress),
}

/// Input event plus the flag used to stop further propagation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolEvent {
    pub kind: ToolEventKind,
    pub handled: bool,
}

impl ToolEvent {
    #[must_use]
    pub fn new(kind: ToolEventKind) -> Self {
        Self {
            kind,
            handled: false,
        }
    }

    #[must_use]
    pub fn button_down(button: PointerButton, x: f64, y: f64) -> Self {
        Self::new(ToolEventKind::ButtonDown {
            button,
            position: ScreenPoint::new(x, y),
        })
    }

    #[must_use]
    pub fn button_up(button: PointerButton, x: f64, y: f64) -> Self {
        Self::new(ToolEventKind::ButtonUp {
            button,
            position: ScreenPoint::new(x, y),
        })
    }

    #[must_use]
    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::new(ToolEventKind::PointerMove {
            position: ScreenPoint::new(x, y),
        })
    }

    #[must_use]
    pub fn pointer_leave() -> Self {
        Self::new(ToolEventKind::PointerLeave)
    }

    #[must_use]
    pub fn wheel(delta: f64, x: f64, y: f64) -> Self {
        Self::new(ToolEventKind::Wheel {
            delta,
            position: ScreenPoint::new(x, y),
        })
    }

    #[must_use]
    pub fn key(press: KeyPress) -> Self {
        Self::new(ToolEventKind::KeyPress(press))
    }
}
