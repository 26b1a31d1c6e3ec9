//! Selection state machine for the element inspector.
//!
//! Generic over an element handle `H` (the client uses
//! `web_sys::HtmlElement`; tests use plain ids). The machine decides *what*
//! changes; the caller performs the matching DOM effects and keeps overlay
//! nodes in lockstep with the transitions reported here.

use crate::geometry::Rect;
use crate::style::{StylePatch, StyleProperty, StyleSnapshot};

/// What a click should do, decided from its modifier keys alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDisposition {
    /// Ctrl-modified: the inspector must not intercept the click at all.
    PassThrough,
    /// Shift-modified: append to the multi-selection.
    MultiAdd,
    /// Plain: single-select.
    Select,
}

/// Classify a click before any default handling runs. Pass-through clicks
/// must not be `preventDefault`ed; the other two must be intercepted.
pub fn classify_click(ctrl: bool, shift: bool) -> ClickDisposition {
    if ctrl {
        ClickDisposition::PassThrough
    } else if shift {
        ClickDisposition::MultiAdd
    } else {
        ClickDisposition::Select
    }
}

/// Observable mode of the inspector, for display and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorMode {
    Inactive,
    Idle,
    Hovering,
    Selected,
    MultiSelected,
}

/// A single selection: the element plus everything needed to restore it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<H> {
    pub handle: H,
    /// Computed-style values captured once, at selection time.
    pub original: StyleSnapshot,
    /// Bounding box at selection time.
    pub rect: Rect,
}

/// Inspector tracking state.
///
/// Single selection and multi-selection are tracked independently; style and
/// text edits apply to whichever is populated (possibly both). Hover is
/// suppressed while a single selection exists.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorState<H> {
    active: bool,
    hovered: Option<H>,
    selected: Option<Selection<H>>,
    multi: Vec<H>,
    edited: StylePatch,
}

impl<H: Clone + PartialEq> Default for InspectorState<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone + PartialEq> InspectorState<H> {
    pub fn new() -> Self {
        Self {
            active: false,
            hovered: None,
            selected: None,
            multi: Vec::new(),
            edited: StylePatch::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> InspectorMode {
        if !self.active {
            InspectorMode::Inactive
        } else if self.selected.is_some() {
            InspectorMode::Selected
        } else if !self.multi.is_empty() {
            InspectorMode::MultiSelected
        } else if self.hovered.is_some() {
            InspectorMode::Hovering
        } else {
            InspectorMode::Idle
        }
    }

    pub fn hovered(&self) -> Option<&H> {
        self.hovered.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection<H>> {
        self.selected.as_ref()
    }

    pub fn multi(&self) -> &[H] {
        &self.multi
    }

    pub fn edited(&self) -> &StylePatch {
        &self.edited
    }

    pub fn activate(&mut self) {
        tracing::debug!("inspector activated");
        self.active = true;
    }

    /// Close the tool: everything tracked is dropped. The caller must remove
    /// every overlay node it created for the previous state.
    pub fn deactivate(&mut self) {
        tracing::debug!("inspector deactivated");
        *self = Self::new();
    }

    /// Track a new hover target. Returns `false` (and tracks nothing) while a
    /// single selection exists.
    pub fn hover(&mut self, handle: H) -> bool {
        if !self.active || self.selected.is_some() {
            return false;
        }
        self.hovered = Some(handle);
        true
    }

    /// Single-select: capture the snapshot/rect, clear hover and any prior
    /// multi-selection, and start a fresh edit patch. Returns the handles
    /// whose multi overlays the caller must remove.
    pub fn select(&mut self, handle: H, original: StyleSnapshot, rect: Rect) -> Vec<H> {
        let cleared = std::mem::take(&mut self.multi);
        self.selected = Some(Selection {
            handle,
            original,
            rect,
        });
        self.hovered = None;
        self.edited.clear();
        cleared
    }

    /// Append to the multi-selection (insertion order preserved). Returns
    /// `false` for duplicates, which get no second overlay. An existing
    /// single selection is left undisturbed.
    pub fn add_multi(&mut self, handle: H) -> bool {
        if self.multi.contains(&handle) {
            return false;
        }
        self.multi.push(handle);
        true
    }

    /// Explicit "clear all": drop both the single selection and the
    /// multi-selection. Returns what was cleared so the caller can remove
    /// the matching overlays.
    pub fn clear_selection(&mut self) -> (Option<Selection<H>>, Vec<H>) {
        self.edited.clear();
        (self.selected.take(), std::mem::take(&mut self.multi))
    }

    /// Every element a style/text mutation applies to: the single selection
    /// and/or every multi-selected element.
    pub fn mutation_targets(&self) -> Vec<H> {
        let mut targets = Vec::with_capacity(self.multi.len() + 1);
        if let Some(selection) = &self.selected {
            targets.push(selection.handle.clone());
        }
        targets.extend(self.multi.iter().cloned());
        targets
    }

    /// Record an edit in the sparse patch. Only single-target edits are
    /// tracked; there is no per-element undo for the multi case.
    pub fn record_edit(&mut self, prop: StyleProperty, value: String) {
        if self.selected.is_some() {
            self.edited.insert(prop, value);
        }
    }

    pub fn edited_value(&self, prop: StyleProperty) -> Option<&str> {
        self.edited.get(&prop).map(String::as_str)
    }

    /// The writes that restore the single selection to its captured
    /// snapshot, or an empty list when nothing is selected. Clears the edit
    /// patch as a side effect of a performed reset.
    pub fn reset_writes(&mut self) -> Vec<(H, StyleProperty, String)> {
        let Some(selection) = &self.selected else {
            return Vec::new();
        };
        self.edited.clear();
        selection
            .original
            .restore_entries()
            .map(|(prop, value)| (selection.handle.clone(), prop, value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_color(color: &str) -> StyleSnapshot {
        StyleSnapshot::capture(|prop| match prop {
            StyleProperty::Color => color.to_string(),
            StyleProperty::FontSize => "16px".to_string(),
            _ => String::new(),
        })
    }

    #[test]
    fn test_activation_starts_idle() {
        let mut state = InspectorState::<u32>::new();
        assert_eq!(state.mode(), InspectorMode::Inactive);

        state.activate();
        assert_eq!(state.mode(), InspectorMode::Idle);
        assert!(state.hovered().is_none());
        assert!(state.selection().is_none());
        assert!(state.multi().is_empty());
    }

    #[test]
    fn test_hover_tracks_and_is_replaced_per_move() {
        let mut state = InspectorState::new();
        state.activate();

        assert!(state.hover(1));
        assert_eq!(state.mode(), InspectorMode::Hovering);
        assert!(state.hover(2));
        assert_eq!(state.hovered(), Some(&2));
    }

    #[test]
    fn test_hover_suppressed_while_selected() {
        let mut state = InspectorState::new();
        state.activate();
        state.select(1, snapshot_with_color("red"), Rect::default());

        assert!(!state.hover(2));
        assert!(state.hovered().is_none());
        assert_eq!(state.mode(), InspectorMode::Selected);
    }

    #[test]
    fn test_select_captures_snapshot_and_clears_multi() {
        let mut state = InspectorState::new();
        state.activate();
        assert!(state.add_multi(7));
        assert!(state.add_multi(8));

        let cleared = state.select(1, snapshot_with_color("rgb(1, 2, 3)"), Rect::default());
        assert_eq!(cleared, vec![7, 8]);
        assert!(state.multi().is_empty());

        let selection = state.selection().unwrap();
        assert_eq!(selection.original.get(StyleProperty::Color), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_multi_add_is_ordered_and_deduplicated() {
        let mut state = InspectorState::new();
        state.activate();

        assert!(state.add_multi(1));
        assert!(state.add_multi(2));
        // Shift-clicking an already-selected element changes nothing
        assert!(!state.add_multi(1));
        assert_eq!(state.multi(), &[1, 2]);
        assert_eq!(state.mode(), InspectorMode::MultiSelected);
    }

    #[test]
    fn test_multi_add_keeps_single_selection() {
        let mut state = InspectorState::new();
        state.activate();
        state.select(1, snapshot_with_color("red"), Rect::default());
        assert!(state.add_multi(2));

        // Both populated: mutations hit all of them
        assert_eq!(state.mutation_targets(), vec![1, 2]);
    }

    #[test]
    fn test_click_classification() {
        // Ctrl wins over shift and never intercepts
        assert_eq!(classify_click(true, false), ClickDisposition::PassThrough);
        assert_eq!(classify_click(true, true), ClickDisposition::PassThrough);
        assert_eq!(classify_click(false, true), ClickDisposition::MultiAdd);
        assert_eq!(classify_click(false, false), ClickDisposition::Select);
    }

    #[test]
    fn test_record_edit_only_tracks_single_target() {
        let mut state = InspectorState::new();
        state.activate();

        // No selection: nothing recorded
        state.record_edit(StyleProperty::Color, "#ff0000".to_string());
        assert!(state.edited().is_empty());

        state.select(1, snapshot_with_color("red"), Rect::default());
        state.record_edit(StyleProperty::Color, "#ff0000".to_string());
        assert_eq!(state.edited_value(StyleProperty::Color), Some("#ff0000"));
    }

    #[test]
    fn test_reset_restores_every_snapshot_property() {
        let mut state = InspectorState::new();
        state.activate();
        state.select(9, snapshot_with_color("rgb(0, 0, 0)"), Rect::default());
        state.record_edit(StyleProperty::Color, "#ff0000".to_string());

        let writes = state.reset_writes();
        assert_eq!(
            writes,
            vec![
                (9, StyleProperty::Color, "rgb(0, 0, 0)".to_string()),
                (9, StyleProperty::FontSize, "16px".to_string()),
            ]
        );
        // Reset empties the edit patch
        assert!(state.edited().is_empty());
    }

    #[test]
    fn test_reset_without_selection_is_a_noop() {
        let mut state = InspectorState::<u32>::new();
        state.activate();
        assert!(state.reset_writes().is_empty());
    }

    #[test]
    fn test_selection_rect_is_captured_once() {
        let mut state = InspectorState::new();
        state.activate();
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        state.select(1, snapshot_with_color("red"), rect);

        // Edits that change the element's geometry do not re-sync the
        // captured rect; overlay staleness after mutation is designed behavior
        state.record_edit(StyleProperty::Width, "400px".to_string());
        assert_eq!(state.selection().unwrap().rect, rect);
    }

    #[test]
    fn test_clear_selection_reports_cleared_handles() {
        let mut state = InspectorState::new();
        state.activate();
        state.select(1, snapshot_with_color("red"), Rect::default());
        state.add_multi(2);
        state.add_multi(3);

        let (selection, multi) = state.clear_selection();
        assert_eq!(selection.map(|s| s.handle), Some(1));
        assert_eq!(multi, vec![2, 3]);
        assert_eq!(state.mode(), InspectorMode::Idle);
    }

    #[test]
    fn test_deactivate_resets_everything() {
        let mut state = InspectorState::new();
        state.activate();
        state.hover(5);
        state.add_multi(6);

        state.deactivate();
        assert_eq!(state.mode(), InspectorMode::Inactive);

        // Reactivation starts from a clean idle state
        state.activate();
        assert_eq!(state.mode(), InspectorMode::Idle);
        assert!(state.multi().is_empty());
    }
}
