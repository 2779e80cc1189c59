//! Gestures emitted by the rendering surface.

use crate::domain::Action;

/// User input coming back from the screen. Indices are 0-based list positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Tap on a row: toggle completion.
    Tap(usize),
    /// Long press on a row: start editing it.
    LongPress(usize),
    /// The input field changed.
    TextChange(String),
    /// A button of the input row.
    Press(Action),
}
