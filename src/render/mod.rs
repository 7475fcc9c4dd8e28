mod frame;
mod null_renderer;
mod overlay;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use overlay::{OverlayStyle, SelectionOverlay, SelectionSnapshot};
pub use primitives::{Color, RectPrimitive, RectStroke};

use crate::error::ZoomResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from the zoom state machine.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ZoomResult<()>;
}
