//! Highlight overlay nodes injected next to tracked elements.
//!
//! The store is the sole owner of every node it appends: each `show`/`add`
//! has a matching `hide`/`clear`, and `clear_all` is called on deactivation
//! so no overlay outlives the tool.

use luach_core::Rect;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Class put on every injected node; click/hover handlers use it to ignore
/// the inspector's own DOM.
pub const OVERLAY_CLASS: &str = "inspector-overlay";

/// Hover highlight (blue).
const HOVER_COLORS: OverlayColors = OverlayColors {
    border: "#3b82f6",
    fill: "rgba(59, 130, 246, 0.1)",
};
/// Single-selection highlight (green).
const SELECTED_COLORS: OverlayColors = OverlayColors {
    border: "#22c55e",
    fill: "rgba(34, 197, 94, 0.2)",
};
/// Multi-selection highlight (purple).
const MULTI_COLORS: OverlayColors = OverlayColors {
    border: "#a855f7",
    fill: "rgba(168, 85, 247, 0.2)",
};

struct OverlayColors {
    border: &'static str,
    fill: &'static str,
}

#[derive(Default)]
pub struct OverlayStore {
    hover: Option<HtmlElement>,
    selected: Option<HtmlElement>,
    multi: Vec<HtmlElement>,
}

impl OverlayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show (or move) the hover box over `rect`.
    pub fn show_hover(&mut self, rect: Rect, tag: &str) {
        match &self.hover {
            Some(overlay) => {
                place(overlay, rect);
                set_label(overlay, tag);
            }
            None => self.hover = make_overlay(&HOVER_COLORS, tag, rect),
        }
    }

    pub fn hide_hover(&mut self) {
        if let Some(overlay) = self.hover.take() {
            overlay.remove();
        }
    }

    /// Show (or move) the selection box over `rect`.
    pub fn show_selected(&mut self, rect: Rect, tag: &str) {
        let label = format!("נבחר: {tag}");
        match &self.selected {
            Some(overlay) => {
                place(overlay, rect);
                set_label(overlay, &label);
            }
            None => self.selected = make_overlay(&SELECTED_COLORS, &label, rect),
        }
    }

    pub fn hide_selected(&mut self) {
        if let Some(overlay) = self.selected.take() {
            overlay.remove();
        }
    }

    /// One dedicated box per multi-selected element, labelled with its tag.
    pub fn add_multi(&mut self, rect: Rect, tag: &str) {
        if let Some(overlay) = make_overlay(&MULTI_COLORS, &format!("מרובה: {tag}"), rect) {
            self.multi.push(overlay);
        }
    }

    pub fn clear_multi(&mut self) {
        for overlay in self.multi.drain(..) {
            overlay.remove();
        }
    }

    pub fn multi_count(&self) -> usize {
        self.multi.len()
    }

    /// Remove every node the store ever created.
    pub fn clear_all(&mut self) {
        self.hide_hover();
        self.hide_selected();
        self.clear_multi();
    }
}

fn place(overlay: &HtmlElement, rect: Rect) {
    let style = overlay.style();
    let _ = style.set_property("top", &format!("{}px", rect.y));
    let _ = style.set_property("left", &format!("{}px", rect.x));
    let _ = style.set_property("width", &format!("{}px", rect.width));
    let _ = style.set_property("height", &format!("{}px", rect.height));
}

fn set_label(overlay: &HtmlElement, text: &str) {
    if let Some(label) = overlay.first_element_child() {
        label.set_text_content(Some(text));
    }
}

fn make_overlay(colors: &OverlayColors, label_text: &str, rect: Rect) -> Option<HtmlElement> {
    let document = gloo::utils::document();

    let overlay: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    overlay.set_class_name(OVERLAY_CLASS);
    let style = overlay.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("pointer-events", "none");
    let _ = style.set_property("z-index", "40");
    let _ = style.set_property("border", &format!("2px solid {}", colors.border));
    let _ = style.set_property("background", colors.fill);
    place(&overlay, rect);

    let label: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    label.set_text_content(Some(label_text));
    let label_style = label.style();
    let _ = label_style.set_property("position", "absolute");
    let _ = label_style.set_property("top", "-24px");
    let _ = label_style.set_property("left", "0");
    let _ = label_style.set_property("background", colors.border);
    let _ = label_style.set_property("color", "#ffffff");
    let _ = label_style.set_property("font-size", "12px");
    let _ = label_style.set_property("padding", "2px 8px");
    let _ = label_style.set_property("border-radius", "4px");
    overlay.append_child(&label).ok()?;

    document.body()?.append_child(&overlay).ok()?;
    Some(overlay)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn overlay_nodes_are_added_and_removed_symmetrically() {
        let document = gloo::utils::document();
        let count =
            || document.query_selector_all(".inspector-overlay").unwrap().length();

        let mut store = OverlayStore::new();
        store.show_hover(Rect::new(0.0, 0.0, 10.0, 10.0), "div");
        store.add_multi(Rect::new(5.0, 5.0, 10.0, 10.0), "span");
        store.add_multi(Rect::new(8.0, 8.0, 10.0, 10.0), "p");
        assert_eq!(count(), 3);

        store.clear_all();
        assert_eq!(count(), 0);
    }
}
