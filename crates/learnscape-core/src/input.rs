//! Pointer and keyboard events, already mapped to normalized coordinates.

use kurbo::Point;

/// A pointer event over the illustration canvas.
///
/// Positions are normalized percentages; the host maps device pixels
/// through [`crate::coords::CanvasBounds`] before dispatching. Leaving
/// the canvas mid-drag carries no position and is treated as a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Leave,
}

/// Keyboard keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
}

impl Key {
    /// Map a DOM-style key name; unrecognized keys are ignored by callers.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Delete" => Some(Key::Delete),
            "Backspace" => Some(Key::Backspace),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }
}
