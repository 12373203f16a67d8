//! Input model: mouse buttons, wheel deltas, and the gesture state machine.
//!
//! The map only has one interaction mode: drag to pan, click to pick, wheel to
//! zoom. `InputState` tracks the press between pointer-down and pointer-up so
//! the engine can tell a click from a drag on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::CLICK_SLOP_PX;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The primary button is down.
    Pressed {
        /// Screen-space position of the pointer-down.
        start: Point,
        /// Screen-space position of the previous pointer event, used for pan deltas.
        last: Point,
        /// Whether the pointer has travelled past the click slop.
        dragged: bool,
    },
}

impl InputState {
    /// Begin a press at `at`.
    #[must_use]
    pub fn press(at: Point) -> Self {
        Self::Pressed { start: at, last: at, dragged: false }
    }

    /// Advance a press to `at`, returning the pan delta since the last event.
    ///
    /// Returns `None` while idle or while still inside the click slop.
    pub fn drag_to(&mut self, at: Point) -> Option<Point> {
        let Self::Pressed { start, last, dragged } = self else {
            return None;
        };
        if !*dragged && start.distance_to(at) < CLICK_SLOP_PX {
            return None;
        }
        *dragged = true;
        let delta = at.sub(*last);
        *last = at;
        Some(delta)
    }
}
