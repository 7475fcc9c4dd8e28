use crate::core::{Axis, AxisMapper, LinearAxisMapper, Orientation, ScreenRect};
use crate::error::{ZoomError, ZoomResult};

use super::{ActiveToolSlot, CursorIcon, PlotSurface, PointerWindow, ToolId};

/// In-memory plot surface backed by two linear mappers.
///
/// Useful for tests and for hosts that keep plot state outside any UI
/// toolkit and only need the zoom bookkeeping.
#[derive(Debug, Clone)]
pub struct HeadlessPlot {
    orientation: Orientation,
    rect: ScreenRect,
    x_mapper: LinearAxisMapper,
    y_mapper: LinearAxisMapper,
    active_tool: ActiveToolSlot,
    redraw_requests: usize,
}

impl HeadlessPlot {
    pub fn new(
        rect: ScreenRect,
        x_mapper: LinearAxisMapper,
        y_mapper: LinearAxisMapper,
    ) -> ZoomResult<Self> {
        if !rect.is_valid() {
            return Err(ZoomError::InvalidData(format!(
                "invalid plot rect: width={}, height={}",
                rect.width, rect.height
            )));
        }
        Ok(Self {
            orientation: Orientation::Horizontal,
            rect,
            x_mapper,
            y_mapper,
            active_tool: ActiveToolSlot::default(),
            redraw_requests: 0,
        })
    }

    /// Plot whose mappers span `rect` edge to edge with the given numeric bounds.
    pub fn linear(rect: ScreenRect, x_bounds: (f64, f64), y_bounds: (f64, f64)) -> ZoomResult<Self> {
        let x_mapper =
            LinearAxisMapper::new(rect.x, rect.x + rect.width, x_bounds.0, x_bounds.1)?;
        let y_mapper =
            LinearAxisMapper::new(rect.y, rect.y + rect.height, y_bounds.0, y_bounds.1)?;
        Self::new(rect, x_mapper, y_mapper)
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn linear_mapper(&self, axis: Axis) -> &LinearAxisMapper {
        match axis {
            Axis::X => &self.x_mapper,
            Axis::Y => &self.y_mapper,
        }
    }

    pub fn linear_mapper_mut(&mut self, axis: Axis) -> &mut LinearAxisMapper {
        match axis {
            Axis::X => &mut self.x_mapper,
            Axis::Y => &mut self.y_mapper,
        }
    }

    #[must_use]
    pub fn bounds(&self, axis: Axis) -> (f64, f64) {
        self.linear_mapper(axis).bounds()
    }

    #[must_use]
    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    #[must_use]
    pub fn active_tool(&self) -> Option<ToolId> {
        self.active_tool.holder()
    }
}

impl PlotSurface for HeadlessPlot {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn screen_rect(&self) -> ScreenRect {
        self.rect
    }

    fn mapper(&self, axis: Axis) -> &dyn AxisMapper {
        self.linear_mapper(axis)
    }

    fn mapper_mut(&mut self, axis: Axis) -> &mut dyn AxisMapper {
        self.linear_mapper_mut(axis)
    }

    fn active_tool_slot(&mut self) -> &mut ActiveToolSlot {
        &mut self.active_tool
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}

/// Pointer window that just records cursor and capture changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeadlessWindow {
    pub cursor: CursorIcon,
    pub capture: Option<ToolId>,
}

impl PointerWindow for HeadlessWindow {
    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    fn capture_owner(&self) -> Option<ToolId> {
        self.capture
    }

    fn set_capture(&mut self, owner: Option<ToolId>) {
        self.capture = owner;
    }
}
