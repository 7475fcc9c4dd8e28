use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::{ZoomInputConfig, ZoomToolConfig};
use crate::core::{
    Axis, HistoryHooks, HistoryNavigation, HistoryStack, KeyPress, ScreenPoint, ZoomLimits,
    ZoomState, map_range, resolve_axis,
};
use crate::error::ZoomResult;
use crate::render::SelectionSnapshot;

use super::wheel::{WheelDirection, wheel_zoom_bounds, wheel_zoom_factor};
use super::{
    CursorIcon, GestureSession, OriginalSettings, PlotSurface, PointerButton, PointerWindow,
    ToolEvent, ToolEventKind, ToolId, ToolState, ZoomTargeting,
};

/// Drag-to-zoom tool with a zoom history.
///
/// The tool is long-lived: it cycles between `Normal` and `Selecting` for as
/// long as the host keeps it attached. Every rejection (short drag, zoom
/// limit, busy active-tool slot) is silent; the only visible effect is that
/// the plot bounds do not change.
#[derive(Debug, Clone)]
pub struct ZoomTool {
    id: ToolId,
    config: ZoomToolConfig,
    input: ZoomInputConfig,
    session: GestureSession,
    armed: bool,
    history: HistoryStack<ZoomState>,
    original_settings: OriginalSettings,
}

impl ZoomTool {
    /// Attaches a tool to `surface`, capturing its current bounds as the
    /// history origin and its settings as the restore target.
    pub fn attach<P: PlotSurface + ?Sized>(
        surface: &P,
        config: ZoomToolConfig,
        input: ZoomInputConfig,
    ) -> ZoomResult<Self> {
        let config = config.validate()?;
        let targeting = ZoomTargeting::new(config.tool_mode, config.axis);
        let origin = targeting.capture_state(surface);
        let original_settings = targeting.capture_settings(surface);
        debug!(mode = ?config.tool_mode, ?origin, "zoom tool attached");
        Ok(Self {
            id: ToolId::next(),
            config,
            input,
            session: GestureSession::default(),
            armed: false,
            history: HistoryStack::new(origin),
            original_settings,
        })
    }

    #[must_use]
    pub fn id(&self) -> ToolId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &ZoomToolConfig {
        &self.config
    }

    /// Durable configuration; session state and input bindings are excluded.
    #[must_use]
    pub fn persisted_config(&self) -> ZoomToolConfig {
        self.config.clone()
    }

    #[must_use]
    pub fn input_config(&self) -> &ZoomInputConfig {
        &self.input
    }

    #[must_use]
    pub fn state(&self) -> ToolState {
        self.session.state
    }

    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.session
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStack<ZoomState> {
        &self.history
    }

    #[must_use]
    pub fn original_settings(&self) -> &OriginalSettings {
        &self.original_settings
    }

    fn targeting(&self) -> ZoomTargeting {
        ZoomTargeting::new(self.config.tool_mode, self.config.axis)
    }

    /// Selection data for the overlay renderer.
    #[must_use]
    pub fn selection_snapshot<P: PlotSurface + ?Sized>(&self, surface: &P) -> SelectionSnapshot {
        SelectionSnapshot {
            selecting: self.session.is_selecting(),
            mode: self.config.tool_mode,
            range_axis: resolve_axis(self.config.axis, surface.orientation()),
            start: self.session.start,
            end: self.session.end,
        }
    }

    /// Arms the tool as if the enter key was pressed and shows the zoom cursor.
    ///
    /// Returns `false` and stays disarmed when another tool holds the
    /// active-tool slot.
    pub fn enable<P, W>(&mut self, surface: &mut P, window: &mut W) -> bool
    where
        P: PlotSurface + ?Sized,
        W: PointerWindow + ?Sized,
    {
        let armed = self.arm(surface);
        if armed {
            window.set_cursor(self.input.pointer);
        }
        armed
    }

    /// Arms the tool without touching the cursor.
    pub fn arm<P: PlotSurface + ?Sized>(&mut self, surface: &mut P) -> bool {
        if !surface.active_tool_slot().claim(self.id) {
            self.armed = false;
            debug!(tool = self.id.raw(), "zoom tool not armed: another tool is active");
            return false;
        }
        self.armed = true;
        true
    }

    /// Disarms the tool, drops any selection, gives up the active-tool slot
    /// and restores the default cursor.
    pub fn disable<P, W>(&mut self, surface: &mut P, window: &mut W)
    where
        P: PlotSurface + ?Sized,
        W: PointerWindow + ?Sized,
    {
        self.disarm(surface);
        window.set_cursor(CursorIcon::Arrow);
    }

    /// Same as [`ZoomTool::disable`] without touching the cursor.
    pub fn disarm<P: PlotSurface + ?Sized>(&mut self, surface: &mut P) {
        self.reset();
        self.armed = false;
        surface.active_tool_slot().release(self.id);
    }

    /// Returns to `Normal` with no selection endpoints.
    pub fn reset(&mut self) {
        self.session.clear();
    }

    /// Host notification that this tool is no longer the active tool.
    pub fn deactivate<P, W>(&mut self, surface: &mut P, window: &mut W)
    where
        P: PlotSurface + ?Sized,
        W: PointerWindow + ?Sized,
    {
        self.disable(surface, window);
    }

    /// Re-captures the history origin after the plotted data changed.
    pub fn on_data_changed<P: PlotSurface + ?Sized>(&mut self, surface: &P) {
        let origin = self.targeting().capture_state(surface);
        debug!(?origin, "data changed, zoom history reset");
        self.history.reset_to(origin);
    }

    /// Steps through the zoom history and applies the resulting entry.
    ///
    /// Returns `true` when the history pointer moved.
    pub fn navigate_history<P: PlotSurface + ?Sized>(
        &mut self,
        surface: &mut P,
        navigation: HistoryNavigation,
    ) -> bool {
        let mut applier = ZoomApplier::new(
            surface,
            self.targeting(),
            self.config.limits,
            &self.original_settings,
        );
        let moved = self.history.navigate_with(navigation, &mut applier);
        debug!(
            ?navigation,
            moved,
            index = self.history.index(),
            "zoom history navigation"
        );
        moved
    }

    /// Dispatches one input event.
    pub fn handle_event<P, W>(&mut self, surface: &mut P, window: &mut W, event: &mut ToolEvent)
    where
        P: PlotSurface + ?Sized,
        W: PointerWindow + ?Sized,
    {
        match &event.kind {
            &ToolEventKind::ButtonDown { button, position } => {
                if self.session.state == ToolState::Normal {
                    self.on_button_down(surface, window, button, position, event);
                }
            }
            &ToolEventKind::PointerMove { position } => {
                if self.session.is_selecting() {
                    self.on_selecting_move(surface, position, event);
                }
            }
            &ToolEventKind::ButtonUp { button, position } => {
                if self.session.is_selecting() && button == self.config.drag_button {
                    self.end_select(surface, window, position, event);
                }
            }
            ToolEventKind::PointerLeave => {
                if self.session.is_selecting() {
                    debug!("pointer left plot, selection aborted");
                    self.end_selecting(surface, window);
                }
            }
            ToolEventKind::KeyPress(press) => {
                let press = press.clone();
                self.on_key_press(surface, window, &press, event);
            }
            &ToolEventKind::Wheel { delta, position } => {
                self.on_wheel(surface, delta, position, event);
            }
        }
    }

    fn on_button_down<P: PlotSurface + ?Sized, W: PointerWindow + ?Sized>(
        &mut self,
        surface: &mut P,
        window: &mut W,
        button: PointerButton,
        position: ScreenPoint,
        event: &mut ToolEvent,
    ) {
        if !(self.input.always_on || self.armed) || button != self.config.drag_button {
            return;
        }
        if !surface.active_tool_slot().claim(self.id) {
            self.armed = false;
            debug!(tool = self.id.raw(), "selection not started: another tool is active");
            return;
        }

        self.session = GestureSession {
            state: ToolState::Selecting,
            start: Some(position),
            end: None,
        };
        window.set_cursor(self.input.pointer);
        window.set_capture(Some(self.id));
        debug!(x = position.x, y = position.y, "zoom selection started");
        self.on_selecting_move(surface, position, event);
    }

    fn on_selecting_move<P: PlotSurface + ?Sized>(
        &mut self,
        surface: &mut P,
        position: ScreenPoint,
        event: &mut ToolEvent,
    ) {
        trace!(x = position.x, y = position.y, "zoom selection extended");
        self.session.end = Some(position);
        surface.request_redraw();
        event.handled = true;
    }

    fn end_select<P: PlotSurface + ?Sized, W: PointerWindow + ?Sized>(
        &mut self,
        surface: &mut P,
        window: &mut W,
        position: ScreenPoint,
        event: &mut ToolEvent,
    ) {
        self.session.end = Some(position);
        event.handled = true;

        let Some(start) = self.session.start else {
            self.end_selecting(surface, window);
            return;
        };

        let delta = start.manhattan_distance(position);
        if delta < f64::from(self.input.minimum_screen_delta) {
            debug!(
                delta,
                minimum = self.input.minimum_screen_delta,
                reason = "below minimum screen delta",
                "zoom selection discarded"
            );
            self.end_selecting(surface, window);
            return;
        }

        let candidate = self.targeting().map_selection(&*surface, start, position);
        let mut applier = ZoomApplier::new(
            &mut *surface,
            self.targeting(),
            self.config.limits,
            &self.original_settings,
        );
        self.history.push_with(candidate, &mut applier);
        self.end_selecting(surface, window);
    }

    /// Ends the selection without zooming.
    fn end_selecting<P: PlotSurface + ?Sized, W: PointerWindow + ?Sized>(
        &mut self,
        surface: &mut P,
        window: &mut W,
    ) {
        if self.config.disable_on_complete {
            self.disable(surface, &mut *window);
        } else {
            self.reset();
            if !self.armed {
                surface.active_tool_slot().release(self.id);
            }
        }
        surface.request_redraw();
        if window.capture_owner() == Some(self.id) {
            window.set_capture(None);
        }
    }

    fn on_key_press<P: PlotSurface + ?Sized, W: PointerWindow + ?Sized>(
        &mut self,
        surface: &mut P,
        window: &mut W,
        press: &KeyPress,
        event: &mut ToolEvent,
    ) {
        if self.session.is_selecting() {
            if self.config.cancel_zoom_key.matches(press) {
                debug!("zoom selection cancelled");
                self.end_selecting(surface, window);
                event.handled = true;
                return;
            }
        } else if !self.input.always_on {
            if !self.armed && self.input.enter_zoom_key.matches(press) {
                self.enable(surface, window);
                return;
            }
            if self.armed && self.input.exit_zoom_key.matches(press) {
                self.armed = false;
                surface.active_tool_slot().release(self.id);
                window.set_cursor(CursorIcon::Arrow);
                return;
            }
        }

        if let Some(navigation) = self.input.history_keys.navigation_for(press) {
            self.navigate_history(surface, navigation);
            event.handled = true;
            surface.request_redraw();
        }
    }

    /// Zooms about the cursor without touching history or gesture state.
    fn on_wheel<P: PlotSurface + ?Sized>(
        &mut self,
        surface: &mut P,
        delta: f64,
        position: ScreenPoint,
        event: &mut ToolEvent,
    ) {
        if !self.config.enable_wheel {
            return;
        }
        let Some(direction) = WheelDirection::from_delta(delta) else {
            return;
        };
        let factor = match wheel_zoom_factor(direction, self.config.wheel_zoom_step) {
            Ok(factor) => factor,
            Err(err) => {
                debug!(error = %err, "wheel zoom skipped");
                return;
            }
        };
        trace!(delta, factor, "wheel zoom");

        let targeting = self.targeting();
        let rect = surface.screen_rect();
        let origin = *self.history.origin();
        let mut updates: SmallVec<[(Axis, f64, f64); 2]> = SmallVec::new();
        for axis in targeting.axes(&*surface) {
            let mapper = targeting.mapper(&*surface, axis);
            let (current_low, current_high) =
                map_range(mapper, axis, rect.origin(), rect.far_corner());
            let anchor = mapper.map_screen_to_data(position.component(axis));
            let (low, high) = wheel_zoom_bounds(anchor, factor, current_low, current_high);
            if self
                .config
                .limits
                .is_limited(origin.axis_bounds(axis), (low, high))
            {
                debug!(?axis, low, high, reason = "zoom limit", "wheel zoom rejected");
                event.handled = true;
                return;
            }
            updates.push((axis, low, high));
        }

        for (axis, low, high) in updates {
            targeting.mapper_mut(surface, axis).set_bounds(low, high);
        }
        event.handled = true;
        surface.request_redraw();
    }
}

/// History hooks that push zoom entries onto the host's mappers.
struct ZoomApplier<'a, P: PlotSurface + ?Sized> {
    surface: &'a mut P,
    targeting: ZoomTargeting,
    limits: ZoomLimits,
    original_settings: &'a OriginalSettings,
}

impl<'a, P: PlotSurface + ?Sized> ZoomApplier<'a, P> {
    fn new(
        surface: &'a mut P,
        targeting: ZoomTargeting,
        limits: ZoomLimits,
        original_settings: &'a OriginalSettings,
    ) -> Self {
        Self {
            surface,
            targeting,
            limits,
            original_settings,
        }
    }

    fn apply_current(&mut self, history: &mut HistoryStack<ZoomState>) {
        if history.is_at_origin() {
            self.targeting
                .restore_settings(&mut *self.surface, self.original_settings);
            self.surface.request_redraw();
            return;
        }

        let current = *history.current();
        let origin = *history.origin();
        let axes = self.targeting.axes(&*self.surface);
        for &axis in &axes {
            let candidate = current.axis_bounds(axis);
            if self.limits.is_limited(origin.axis_bounds(axis), candidate) {
                debug!(
                    ?axis,
                    ?candidate,
                    reason = "zoom limit",
                    "zoom rejected, history entry dropped"
                );
                history.pop();
                return;
            }
        }

        for axis in axes {
            let (low, high) = current.axis_bounds(axis);
            self.targeting
                .mapper_mut(&mut *self.surface, axis)
                .set_bounds(low, high);
        }
        debug!(?current, index = history.index(), "zoom applied");
        self.surface.request_redraw();
    }
}

impl<P: PlotSurface + ?Sized> HistoryHooks<ZoomState> for ZoomApplier<'_, P> {
    fn on_navigate(&mut self, history: &mut HistoryStack<ZoomState>) {
        self.apply_current(history);
    }

    fn on_reset(&mut self, history: &mut HistoryStack<ZoomState>) {
        self.apply_current(history);
        history.reset_to(self.targeting.capture_state(&*self.surface));
    }
}
