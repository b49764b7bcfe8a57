//! Latest pointer position as seen by the simulation.

use glam::Vec2;

/// Most recent pointer (mouse or touch) position in canvas pixels.
///
/// Input callbacks overwrite it at any time; the tick reads it once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Absent,
    Present(Vec2),
}

impl PointerState {
    #[inline]
    pub fn position(self) -> Option<Vec2> {
        match self {
            PointerState::Present(p) if p.is_finite() => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_present(self) -> bool {
        self.position().is_some()
    }
}

impl From<Option<Vec2>> for PointerState {
    fn from(p: Option<Vec2>) -> Self {
        p.map_or(PointerState::Absent, PointerState::Present)
    }
}
