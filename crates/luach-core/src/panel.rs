//! Control-panel drag math.
//!
//! The panel is free-floating and dragged from its header. Pointer-down
//! records the pointer's offset inside the panel; every pointer-move while
//! dragging places the panel at pointer minus that offset; pointer-up ends
//! the drag. Position persists only for the current activation.

/// Initial panel position for a fresh activation.
pub const PANEL_HOME: (f64, f64) = (16.0, 16.0);

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Top-left screen position of the panel.
    pub position: (f64, f64),
    /// Pointer offset inside the panel while a drag is in progress.
    drag_offset: Option<(f64, f64)>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            position: PANEL_HOME,
            drag_offset: None,
        }
    }

    /// Pointer-down on the header: record where inside the panel the pointer
    /// grabbed it.
    pub fn begin_drag(&mut self, pointer: (f64, f64), panel_origin: (f64, f64)) {
        self.drag_offset = Some((pointer.0 - panel_origin.0, pointer.1 - panel_origin.1));
    }

    /// Pointer-move: reposition if dragging. Returns whether the panel moved.
    pub fn drag_to(&mut self, pointer: (f64, f64)) -> bool {
        match self.drag_offset {
            Some((dx, dy)) => {
                self.position = (pointer.0 - dx, pointer.1 - dy);
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }
}
