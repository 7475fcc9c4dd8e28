//! plot-zoom: headless drag-to-zoom tool for 2D plots.
//!
//! The crate covers the interaction state machine (normal/selecting), the
//! screen-to-data mapping for range and box selections, zoom limits relative
//! to the original view, and a steppable zoom history. Rendering, mapper
//! implementations and event delivery belong to the host; the traits in
//! [`interaction`] describe what the tool needs from it.

pub mod config;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use config::{ZoomInputConfig, ZoomToolConfig};
pub use error::{ZoomError, ZoomResult};
pub use interaction::{PlotSurface, PointerWindow, ToolEvent, ZoomTool};
