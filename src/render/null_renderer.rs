use crate::error::ZoomResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ZoomResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
