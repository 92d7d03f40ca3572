//! Input model: editor modes, keys, and the gesture state machine.
//!
//! `Mode` is the operator-selected tool. `UiState` carries the selection the
//! renderer highlights. `InputState` is the gesture in progress between
//! events: a pending wall waiting for its second click, a wall drag, or a
//! canvas pan. Each variant carries everything needed to finish the gesture.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{FurnitureId, WallId};

/// Which editing mode is active. Modes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Two clicks add a wall segment.
    #[default]
    AddWalls,
    /// Dragging a wall translates it.
    MoveWalls,
    /// Pressing on a wall deletes it.
    DeleteWalls,
    /// Furniture selection and placement; walls are inert.
    Furniture,
}

impl Mode {
    /// Whether walls react to pointer input in this mode.
    #[must_use]
    pub fn edits_walls(self) -> bool {
        !matches!(self, Self::Furniture)
    }
}

/// Direction of a discrete furniture step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in canvas space (y grows downward).
    #[must_use]
    pub fn unit(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the host (e.g.
/// `"ArrowLeft"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// The furniture step this key maps to, if it is an arrow key.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.0.as_str() {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Persistent UI state visible to the renderer.
///
/// Selection is a single id per kind, never a flag on the items themselves.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub mode: Mode,
    pub selected_wall: Option<WallId>,
    pub selected_furniture: Option<FurnitureId>,
}

/// Gesture in progress.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// First wall click recorded; the next click finalizes the segment.
    PendingWall {
        /// Model-space start of the wall.
        start: Point,
    },
    /// A wall is being dragged by its midpoint.
    DraggingWall {
        id: WallId,
        /// Wall start at pointer-down.
        orig_start: Point,
        /// Wall end at pointer-down.
        orig_end: Point,
    },
    /// The canvas is being panned.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
}
