use serde::{Deserialize, Serialize};

use crate::core::{Axis, ScreenPoint, ScreenRect, ZoomMode};
use crate::error::{ZoomError, ZoomResult};
use crate::render::{Color, RectPrimitive, RenderFrame};

fn default_alpha() -> Option<f64> {
    Some(0.4)
}

fn default_border_size() -> u32 {
    1
}

/// Appearance of the selection overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub color: Color,
    /// Replaces the alpha channel of `color` when drawing the fill.
    #[serde(default = "default_alpha")]
    pub alpha: Option<f64>,
    pub border_color: Color,
    #[serde(default = "default_border_size")]
    pub border_size: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Color::LIGHT_SKY_BLUE,
            alpha: default_alpha(),
            border_color: Color::DODGER_BLUE,
            border_size: default_border_size(),
        }
    }
}

impl OverlayStyle {
    pub fn validate(self) -> ZoomResult<Self> {
        self.color.validate()?;
        self.border_color.validate()?;
        if let Some(alpha) = self.alpha {
            if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                return Err(ZoomError::InvalidConfig(
                    "overlay alpha must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        if self.border_size == 0 {
            return Err(ZoomError::InvalidConfig(
                "overlay border_size must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    fn fill_color(self) -> Color {
        match self.alpha {
            Some(alpha) => self.color.with_alpha(alpha),
            None => self.color,
        }
    }
}

/// What the overlay needs to know about an in-progress selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionSnapshot {
    pub selecting: bool,
    pub mode: ZoomMode,
    /// Screen axis of the band in range mode.
    pub range_axis: Axis,
    pub start: Option<ScreenPoint>,
    pub end: Option<ScreenPoint>,
}

/// Turns a selection snapshot into draw commands clipped to the component.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionOverlay {
    pub style: OverlayStyle,
}

impl SelectionOverlay {
    #[must_use]
    pub fn new(style: OverlayStyle) -> Self {
        Self { style }
    }

    /// Returns an empty frame unless a selection with both endpoints is in progress.
    #[must_use]
    pub fn build_frame(&self, selection: &SelectionSnapshot, component: ScreenRect) -> RenderFrame {
        let frame = RenderFrame::new(component);
        if !selection.selecting {
            return frame;
        }
        let (Some(start), Some(end)) = (selection.start, selection.end) else {
            return frame;
        };

        match selection.mode {
            ZoomMode::Box => frame.with_rect(self.box_rect(start, end)),
            ZoomMode::Range => {
                frame.with_rect(self.band_rect(start, end, selection.range_axis, component))
            }
        }
    }

    fn box_rect(&self, start: ScreenPoint, end: ScreenPoint) -> RectPrimitive {
        let rect = RectPrimitive::new(
            start.x,
            start.y,
            end.x - start.x + 1.0,
            end.y - start.y + 1.0,
        )
        .with_stroke(self.style.border_color, f64::from(self.style.border_size));
        if self.style.color.is_transparent() {
            rect
        } else {
            rect.with_fill(self.style.fill_color())
        }
    }

    fn band_rect(
        &self,
        start: ScreenPoint,
        end: ScreenPoint,
        axis: Axis,
        component: ScreenRect,
    ) -> RectPrimitive {
        let across = axis.other();
        let along_start = start.component(axis);
        let along_size = end.component(axis) - along_start;
        let across_start = component.position(across);
        let across_size = component.extent(across);
        let (x, y, width, height) = match axis {
            Axis::X => (along_start, across_start, along_size, across_size),
            Axis::Y => (across_start, along_start, across_size, along_size),
        };
        let alpha = self.style.alpha.unwrap_or(1.0);
        RectPrimitive::new(x, y, width, height)
            .with_fill(self.style.color.with_alpha(self.style.color.alpha * alpha))
            .with_stroke(
                self.style
                    .border_color
                    .with_alpha(self.style.border_color.alpha * alpha),
                f64::from(self.style.border_size),
            )
    }
}
