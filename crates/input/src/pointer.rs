//! Mouse tracking for grid drags.
//!
//! Terminals report presses, drags and releases but have no notion of the
//! pointer leaving a widget. [`PointerTracker`] derives that from hit-testing:
//! a drag onto a position outside the grid ends the gesture with
//! [`PointerEvent::Leave`], and the later release is swallowed.

use crate::types::{CellPos, PointerEvent};
use crossterm::event::{MouseButton, MouseEventKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    pressed: bool,
    last: Option<CellPos>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Translate one mouse event.
    ///
    /// `cell` is the grid cell under the pointer, or None when the pointer is
    /// outside the grid.
    pub fn handle(&mut self, kind: MouseEventKind, cell: Option<CellPos>) -> Option<PointerEvent> {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let cell = cell?;
                self.pressed = true;
                self.last = Some(cell);
                Some(PointerEvent::Down(cell))
            }
            MouseEventKind::Drag(MouseButton::Left) if self.pressed => match cell {
                Some(cell) if self.last == Some(cell) => None,
                Some(cell) => {
                    self.last = Some(cell);
                    Some(PointerEvent::Move(cell))
                }
                None => {
                    self.reset();
                    Some(PointerEvent::Leave)
                }
            },
            MouseEventKind::Up(MouseButton::Left) if self.pressed => {
                self.reset();
                Some(PointerEvent::Up)
            }
            _ => None,
        }
    }

    /// Forget any open press (e.g. when the screen changes).
    pub fn reset(&mut self) {
        self.pressed = false;
        self.last = None;
    }
}
