//! Zoom tool configuration.
//!
//! [`ZoomToolConfig`] is the durable part that hosts may persist.
//! [`ZoomInputConfig`] holds input bindings and session tuning that are never
//! serialized.

use serde::{Deserialize, Serialize};

use crate::core::{AxisSelector, HistoryKeys, KeySpec, ZoomLimits, ZoomMode};
use crate::error::{ZoomError, ZoomResult};
use crate::interaction::{CursorIcon, PointerButton};
use crate::render::OverlayStyle;

fn default_true() -> bool {
    true
}

fn default_wheel_zoom_step() -> f64 {
    1.0
}

fn default_cancel_zoom_key() -> KeySpec {
    KeySpec::new("Esc")
}

/// Persistable zoom tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomToolConfig {
    #[serde(default)]
    pub tool_mode: ZoomMode,
    /// Logical axis zoomed in range mode.
    #[serde(default)]
    pub axis: AxisSelector,
    #[serde(default)]
    pub limits: ZoomLimits,
    #[serde(default = "default_true")]
    pub enable_wheel: bool,
    #[serde(default)]
    pub drag_button: PointerButton,
    /// Conversion ratio from wheel steps to zoom factors.
    #[serde(default = "default_wheel_zoom_step")]
    pub wheel_zoom_step: f64,
    /// Disarms the tool after each completed or aborted selection.
    #[serde(default = "default_true")]
    pub disable_on_complete: bool,
    /// Aborts an in-progress selection.
    #[serde(default = "default_cancel_zoom_key")]
    pub cancel_zoom_key: KeySpec,
    #[serde(default)]
    pub overlay: OverlayStyle,
}

impl Default for ZoomToolConfig {
    fn default() -> Self {
        Self {
            tool_mode: ZoomMode::default(),
            axis: AxisSelector::default(),
            limits: ZoomLimits::default(),
            enable_wheel: true,
            drag_button: PointerButton::default(),
            wheel_zoom_step: default_wheel_zoom_step(),
            disable_on_complete: true,
            cancel_zoom_key: default_cancel_zoom_key(),
            overlay: OverlayStyle::default(),
        }
    }
}

impl ZoomToolConfig {
    /// Range-mode config along `axis`.
    #[must_use]
    pub fn range(axis: AxisSelector) -> Self {
        Self {
            tool_mode: ZoomMode::Range,
            axis,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn boxed() -> Self {
        Self {
            tool_mode: ZoomMode::Box,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_drag_button(mut self, button: PointerButton) -> Self {
        self.drag_button = button;
        self
    }

    #[must_use]
    pub fn with_wheel(mut self, enabled: bool, step: f64) -> Self {
        self.enable_wheel = enabled;
        self.wheel_zoom_step = step;
        self
    }

    #[must_use]
    pub fn with_cancel_zoom_key(mut self, key: KeySpec) -> Self {
        self.cancel_zoom_key = key;
        self
    }

    #[must_use]
    pub fn with_disable_on_complete(mut self, disable: bool) -> Self {
        self.disable_on_complete = disable;
        self
    }

    pub fn validate(self) -> ZoomResult<Self> {
        self.limits.validate()?;
        if !self.wheel_zoom_step.is_finite() || self.wheel_zoom_step <= 0.0 {
            return Err(ZoomError::InvalidConfig(
                "wheel_zoom_step must be finite and > 0".to_owned(),
            ));
        }
        self.overlay.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ZoomResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ZoomError::Serialization(format!("failed to serialize zoom config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ZoomResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ZoomError::Serialization(format!("failed to parse zoom config json: {e}"))
        })?;
        config.validate()
    }
}

/// Input bindings and per-session tuning; not part of persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomInputConfig {
    /// When set, the drag button always starts a selection and the
    /// enter/exit keys are ignored.
    pub always_on: bool,
    pub enter_zoom_key: KeySpec,
    pub exit_zoom_key: KeySpec,
    /// Manhattan pixel distance below which a drag is discarded.
    pub minimum_screen_delta: u32,
    pub history_keys: HistoryKeys,
    /// Cursor shown while armed or selecting.
    pub pointer: CursorIcon,
}

impl Default for ZoomInputConfig {
    fn default() -> Self {
        Self {
            always_on: false,
            enter_zoom_key: KeySpec::new("z"),
            exit_zoom_key: KeySpec::new("z"),
            minimum_screen_delta: 10,
            history_keys: HistoryKeys::default(),
            pointer: CursorIcon::Magnifier,
        }
    }
}

impl ZoomInputConfig {
    #[must_use]
    pub fn always_on() -> Self {
        Self {
            always_on: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_minimum_screen_delta(mut self, pixels: u32) -> Self {
        self.minimum_screen_delta = pixels;
        self
    }
}
