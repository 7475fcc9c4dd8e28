use smallvec::SmallVec;

use crate::core::{
    Axis, AxisMapper, AxisSelector, AxisSettings, DataPair, ScreenPoint, ZoomMode, ZoomState,
    map_box, map_range, resolve_axis, zoom_axes,
};

use super::PlotSurface;

/// Mapper settings captured when the tool attached, restored verbatim when
/// history returns to its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginalSettings {
    Range(AxisSettings),
    Box { x: AxisSettings, y: AxisSettings },
}

impl OriginalSettings {
    #[must_use]
    pub fn for_axis(&self, axis: Axis) -> AxisSettings {
        match *self {
            Self::Range(settings) => settings,
            Self::Box { x, y } => match axis {
                Axis::X => x,
                Axis::Y => y,
            },
        }
    }
}

/// Range/box strategy over the host's mapper capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomTargeting {
    pub mode: ZoomMode,
    pub selector: AxisSelector,
}

impl ZoomTargeting {
    #[must_use]
    pub fn new(mode: ZoomMode, selector: AxisSelector) -> Self {
        Self { mode, selector }
    }

    /// Screen axes the zoom acts on, in application order.
    #[must_use]
    pub fn axes<P: PlotSurface + ?Sized>(self, surface: &P) -> SmallVec<[Axis; 2]> {
        zoom_axes(self.mode, self.selector, surface.orientation())
    }

    #[must_use]
    pub fn mapper<'s, P: PlotSurface + ?Sized>(
        self,
        surface: &'s P,
        axis: Axis,
    ) -> &'s dyn AxisMapper {
        match self.mode {
            ZoomMode::Range => surface.mapper_for(self.selector),
            ZoomMode::Box => surface.mapper(axis),
        }
    }

    pub fn mapper_mut<'s, P: PlotSurface + ?Sized>(
        self,
        surface: &'s mut P,
        axis: Axis,
    ) -> &'s mut dyn AxisMapper {
        match self.mode {
            ZoomMode::Range => surface.mapper_for_mut(self.selector),
            ZoomMode::Box => surface.mapper_mut(axis),
        }
    }

    /// Current numeric bounds as a history entry.
    #[must_use]
    pub fn capture_state<P: PlotSurface + ?Sized>(self, surface: &P) -> ZoomState {
        match self.mode {
            ZoomMode::Range => {
                let (low, high) = surface.mapper_for(self.selector).bounds();
                ZoomState::Range { low, high }
            }
            ZoomMode::Box => {
                let (x_low, x_high) = surface.mapper(Axis::X).bounds();
                let (y_low, y_high) = surface.mapper(Axis::Y).bounds();
                ZoomState::Box {
                    low: DataPair::new(x_low, y_low),
                    high: DataPair::new(x_high, y_high),
                }
            }
        }
    }

    #[must_use]
    pub fn capture_settings<P: PlotSurface + ?Sized>(self, surface: &P) -> OriginalSettings {
        match self.mode {
            ZoomMode::Range => OriginalSettings::Range(surface.mapper_for(self.selector).settings()),
            ZoomMode::Box => OriginalSettings::Box {
                x: surface.mapper(Axis::X).settings(),
                y: surface.mapper(Axis::Y).settings(),
            },
        }
    }

    pub fn restore_settings<P: PlotSurface + ?Sized>(
        self,
        surface: &mut P,
        settings: &OriginalSettings,
    ) {
        for axis in self.axes(&*surface) {
            self.mapper_mut(surface, axis)
                .set_settings(settings.for_axis(axis));
        }
    }

    /// Maps a screen drag into the candidate history entry.
    #[must_use]
    pub fn map_selection<P: PlotSurface + ?Sized>(
        self,
        surface: &P,
        start: ScreenPoint,
        end: ScreenPoint,
    ) -> ZoomState {
        match self.mode {
            ZoomMode::Range => {
                let axis = resolve_axis(self.selector, surface.orientation());
                let (low, high) = map_range(surface.mapper_for(self.selector), axis, start, end);
                ZoomState::Range { low, high }
            }
            ZoomMode::Box => {
                let (low, high) =
                    map_box(surface.mapper(Axis::X), surface.mapper(Axis::Y), start, end);
                ZoomState::Box { low, high }
            }
        }
    }
}
