use crate::core::ScreenRect;
use crate::error::{ZoomError, ZoomResult};
use crate::render::RectPrimitive;

/// Backend-agnostic draw list for one overlay pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Clip rectangle; nothing outside the host component is drawn.
    pub clip: ScreenRect,
    pub rects: Vec<RectPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(clip: ScreenRect) -> Self {
        Self {
            clip,
            rects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> ZoomResult<()> {
        if !self.clip.is_valid() {
            return Err(ZoomError::InvalidData(format!(
                "invalid clip rect: width={}, height={}",
                self.clip.width, self.clip.height
            )));
        }

        for rect in &self.rects {
            rect.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
