//! Pointer drag to page-space movement
//!
//! Screen deltas are converted to millimetres through the ratio of the
//! rendered page width to the physical page width, clamped to the page and
//! rounded to a tenth of a millimetre.

use crate::layout::LayoutState;
use crate::types::PageGeometry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        id: u32,
        start_pointer: (f32, f32),
        start_position: (f32, f32),
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragController {
    state: DragState,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to one decimal place
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

impl DragController {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_id(&self) -> Option<u32> {
        match self.state {
            DragState::Dragging { id, .. } => Some(id),
            DragState::Idle => None,
        }
    }

    /// Select the record and start tracking from `pointer` (screen pixels).
    ///
    /// Returns `false` and stays idle when the id is unknown.
    pub fn pointer_down(&mut self, layout: &mut LayoutState, id: u32, pointer: (f32, f32)) -> bool {
        let Some(letter) = layout.get(id) else {
            return false;
        };
        let start_position = (letter.x, letter.y);
        layout.select(id);
        self.state = DragState::Dragging {
            id,
            start_pointer: pointer,
            start_position,
        };
        true
    }

    /// Move the dragged record to follow `pointer`.
    ///
    /// Returns the new position, or `None` when idle or when the page has no
    /// rendered width yet.
    pub fn pointer_move(
        &self,
        layout: &mut LayoutState,
        pointer: (f32, f32),
        rendered_width_px: f32,
        geometry: PageGeometry,
    ) -> Option<(f32, f32)> {
        let DragState::Dragging {
            id,
            start_pointer,
            start_position,
        } = self.state
        else {
            return None;
        };
        if rendered_width_px <= 0.0 || !rendered_width_px.is_finite() {
            return None;
        }

        let px_per_mm = rendered_width_px / geometry.width_mm;
        let dx_mm = (pointer.0 - start_pointer.0) / px_per_mm;
        let dy_mm = (pointer.1 - start_pointer.1) / px_per_mm;

        let (x, y) = geometry.clamp(start_position.0 + dx_mm, start_position.1 + dy_mm);
        let (x, y) = (round_tenth(x), round_tenth(y));

        layout.set_position(id, x, y).then_some((x, y))
    }

    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }
}
