//! # Drag Controller
//!
//! Idle → (press) → Dragging → (release | capture lost) → Idle.
//!
//! The press point is the fixed corner of the bounding box and the cursor is
//! the opposite corner. Pointer capture is the caller's job; this type only
//! owns the shape arithmetic.

use crate::shape::{Ellipse, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    anchor: Point,
    ellipse: Ellipse,
    normalize_radii: bool,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DragController {
    pub fn new(normalize_radii: bool) -> Self {
        Self {
            state: DragState::Idle,
            anchor: Point::default(),
            ellipse: Ellipse::default(),
            normalize_radii,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn ellipse(&self) -> Ellipse {
        self.ellipse
    }

    /// Start a new ellipse at `at`, discarding the previous one.
    pub fn press(&mut self, at: Point) {
        self.anchor = at;
        self.ellipse = Ellipse::dot(at);
        self.state = DragState::Dragging;
    }

    /// Stretch the ellipse to `to`.
    ///
    /// Returns true when the shape changed. Ignored unless a drag is in
    /// progress and the primary button is still reported down.
    pub fn drag_to(&mut self, to: Point, primary_down: bool) -> bool {
        if !(self.is_dragging() && primary_down) {
            return false;
        }

        let ellipse = Ellipse::from_corners(self.anchor, to);
        self.ellipse = if self.normalize_radii {
            ellipse.normalized()
        } else {
            ellipse
        };
        true
    }

    /// End the drag. Returns true if one was in progress.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
