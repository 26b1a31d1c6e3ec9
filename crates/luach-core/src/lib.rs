//! Luach-Live Core Library
//!
//! DOM-free engine for the element inspector: selection state machine,
//! computed-style snapshots, overlay geometry, transform arithmetic, and
//! panel drag math.
//!
//! The crate is generic over an element *handle* so the decision logic runs
//! (and tests) on native targets; the WASM client instantiates it with
//! `web_sys::HtmlElement` and performs the actual DOM effects.

pub mod geometry;
pub mod inspector;
pub mod panel;
pub mod style;
pub mod transform;

pub use geometry::Rect;
pub use inspector::{ClickDisposition, InspectorMode, InspectorState, Selection, classify_click};
pub use panel::{PANEL_HOME, PanelState};
pub use style::{StylePatch, StyleProperty, StyleSnapshot};
pub use transform::{MOVE_STEP, MoveDirection, nudge, parse_translate, strip_translate};
