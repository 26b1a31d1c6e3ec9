//! Element inspector: live selection, restyling, retexting, and
//! repositioning of arbitrary page elements.
//!
//! Decisions (what is tracked, what a click means, what reset writes) come
//! from `luach-core`; this module performs the matching DOM effects and owns
//! the document-level listeners. Click handling runs in the capture phase so
//! plain/shift clicks can be vetoed before the page's own handlers, while
//! ctrl-clicks pass through untouched.

mod overlay;
mod panel;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use luach_core::{
    ClickDisposition, InspectorState, MOVE_STEP, MoveDirection, PanelState, Rect, StyleProperty,
    StyleSnapshot, classify_click, nudge,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use overlay::{OVERLAY_CLASS, OverlayStore};
use panel::{InspectorPanel, PANEL_CLASS};

/// Full inspector UI state behind a reducer handle.
#[derive(Clone)]
pub struct InspectorUi {
    pub state: InspectorState<HtmlElement>,
    pub panel: PanelState,
    /// Mirror of the selection's text content for the text tab.
    pub edited_text: String,
    overlays: Rc<RefCell<OverlayStore>>,
}

impl PartialEq for InspectorUi {
    fn eq(&self, _other: &Self) -> bool {
        // Always return false to ensure re-renders
        false
    }
}

impl InspectorUi {
    pub fn new() -> Self {
        Self {
            state: InspectorState::new(),
            panel: PanelState::new(),
            edited_text: String::new(),
            overlays: Rc::new(RefCell::new(OverlayStore::new())),
        }
    }
}

pub enum InspectorAction {
    Activate,
    Deactivate,
    Hover(HtmlElement),
    SelectTarget(HtmlElement),
    MultiAdd(HtmlElement),
    ClearSelection,
    ApplyStyle(StyleProperty, String),
    ApplyText(String),
    ResetSelected,
    Move(MoveDirection),
    PanelDragStart { pointer: (f64, f64) },
    PanelDragMove { pointer: (f64, f64) },
    PanelDragEnd,
}

impl Reducible for InspectorUi {
    type Action = InspectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Hover is suppressed (and must not re-render) while a selection exists
        if let InspectorAction::Hover(_) = &action {
            if !self.state.is_active() || self.state.selection().is_some() {
                return self;
            }
        }

        let mut next = (*self).clone();

        match action {
            InspectorAction::Activate => {
                next.state.activate();
                next.panel = PanelState::new();
            }
            InspectorAction::Deactivate => {
                next.overlays.borrow_mut().clear_all();
                next.state.deactivate();
                next.edited_text.clear();
            }
            InspectorAction::Hover(element) => {
                if next.state.hover(element.clone()) {
                    next.overlays
                        .borrow_mut()
                        .show_hover(page_rect(&element), &tag_of(&element));
                }
            }
            InspectorAction::SelectTarget(element) => {
                let snapshot = capture_snapshot(&element);
                let rect = page_rect(&element);
                let cleared = next.state.select(element.clone(), snapshot, rect);

                let mut overlays = next.overlays.borrow_mut();
                if !cleared.is_empty() {
                    overlays.clear_multi();
                }
                overlays.hide_hover();
                overlays.show_selected(rect, &tag_of(&element));
                drop(overlays);

                next.edited_text = element.text_content().unwrap_or_default();

                // Re-sync the selection box once the current layout pass
                // settles; after this it intentionally goes stale.
                let overlays = next.overlays.clone();
                Timeout::new(0, move || {
                    overlays
                        .borrow_mut()
                        .show_selected(page_rect(&element), &tag_of(&element));
                })
                .forget();
            }
            InspectorAction::MultiAdd(element) => {
                if next.state.add_multi(element.clone()) {
                    next.overlays
                        .borrow_mut()
                        .add_multi(page_rect(&element), &tag_of(&element));
                }
            }
            InspectorAction::ClearSelection => {
                let (selection, multi) = next.state.clear_selection();
                let mut overlays = next.overlays.borrow_mut();
                if selection.is_some() {
                    overlays.hide_selected();
                }
                if !multi.is_empty() {
                    overlays.clear_multi();
                }
            }
            InspectorAction::ApplyStyle(prop, value) => {
                apply_style(&mut next, prop, value);
            }
            InspectorAction::ApplyText(text) => {
                for target in next.state.mutation_targets() {
                    target.set_text_content(Some(&text));
                }
                next.edited_text = text;
            }
            InspectorAction::ResetSelected => {
                for (element, prop, value) in next.state.reset_writes() {
                    let _ = element.style().set_property(prop.css_name(), &value);
                }
            }
            InspectorAction::Move(direction) => {
                if let Some(selection) = next.state.selection() {
                    let current = selection
                        .handle
                        .style()
                        .get_property_value("transform")
                        .unwrap_or_default();
                    let value = nudge(&current, direction, MOVE_STEP);
                    apply_style(&mut next, StyleProperty::Transform, value);
                }
            }
            InspectorAction::PanelDragStart { pointer } => {
                let origin = next.panel.position;
                next.panel.begin_drag(pointer, origin);
            }
            InspectorAction::PanelDragMove { pointer } => {
                next.panel.drag_to(pointer);
            }
            InspectorAction::PanelDragEnd => {
                next.panel.end_drag();
            }
        }

        Rc::new(next)
    }
}

/// Write one property to every mutation target and record single-target
/// edits in the patch. Malformed values are left for the style engine to
/// ignore; nothing is surfaced.
fn apply_style(ui: &mut InspectorUi, prop: StyleProperty, value: String) {
    for target in ui.state.mutation_targets() {
        let _ = target.style().set_property(prop.css_name(), &value);
    }
    ui.state.record_edit(prop, value);
}

fn tag_of(element: &HtmlElement) -> String {
    element.tag_name().to_lowercase()
}

/// Bounding rectangle shifted by the current page scroll.
fn page_rect(element: &HtmlElement) -> Rect {
    let rect = element.get_bounding_client_rect();
    let window = gloo::utils::window();
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height()).offset(scroll_x, scroll_y)
}

/// Capture the resolved computed style of `element`.
fn capture_snapshot(element: &HtmlElement) -> StyleSnapshot {
    let computed = gloo::utils::window()
        .get_computed_style(element)
        .ok()
        .flatten();
    StyleSnapshot::capture(|prop| {
        computed
            .as_ref()
            .and_then(|style| style.get_property_value(prop.css_name()).ok())
            .unwrap_or_default()
    })
}

fn event_target_element(event: &MouseEvent) -> Option<HtmlElement> {
    event.target()?.dyn_into::<HtmlElement>().ok()
}

/// The inspector must never track its own panel or overlay nodes.
fn is_inspector_node(element: &HtmlElement) -> bool {
    let within = |class: &str| {
        element
            .closest(&format!(".{class}"))
            .ok()
            .flatten()
            .is_some()
    };
    within(PANEL_CLASS) || within(OVERLAY_CLASS)
}

#[function_component(ElementInspector)]
pub fn element_inspector() -> Html {
    let ui = use_reducer(InspectorUi::new);

    // Document-level hover + capture-phase click tracking while active
    {
        let ui = ui.clone();
        use_effect_with(ui.state.is_active(), move |active| {
            let mut listeners = Vec::new();
            if *active {
                let document = gloo::utils::document();

                let hover_ui = ui.clone();
                listeners.push(EventListener::new(&document, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let Some(target) = event_target_element(event) else {
                        return;
                    };
                    if is_inspector_node(&target) {
                        return;
                    }
                    hover_ui.dispatch(InspectorAction::Hover(target));
                }));

                let click_ui = ui.clone();
                listeners.push(EventListener::new_with_options(
                    &document,
                    "click",
                    // Capture phase: veto plain/shift clicks before the
                    // page's own handlers; passive must be off for that
                    EventListenerOptions {
                        phase: EventListenerPhase::Capture,
                        passive: false,
                    },
                    move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let Some(target) = event_target_element(event) else {
                            return;
                        };
                        if is_inspector_node(&target) {
                            return;
                        }
                        match classify_click(event.ctrl_key(), event.shift_key()) {
                            // Let the page's own click handler run
                            ClickDisposition::PassThrough => {}
                            ClickDisposition::MultiAdd => {
                                event.prevent_default();
                                event.stop_propagation();
                                click_ui.dispatch(InspectorAction::MultiAdd(target));
                            }
                            ClickDisposition::Select => {
                                event.prevent_default();
                                event.stop_propagation();
                                click_ui.dispatch(InspectorAction::SelectTarget(target));
                            }
                        }
                    },
                ));
            }
            move || drop(listeners)
        });
    }

    // Panel drag follows the pointer across the whole document
    {
        let ui = ui.clone();
        use_effect_with(ui.panel.is_dragging(), move |dragging| {
            let mut listeners = Vec::new();
            if *dragging {
                let document = gloo::utils::document();

                let move_ui = ui.clone();
                listeners.push(EventListener::new(&document, "mousemove", move |event| {
                    if let Some(event) = event.dyn_ref::<MouseEvent>() {
                        move_ui.dispatch(InspectorAction::PanelDragMove {
                            pointer: (f64::from(event.client_x()), f64::from(event.client_y())),
                        });
                    }
                }));

                let up_ui = ui.clone();
                listeners.push(EventListener::new(&document, "mouseup", move |_| {
                    up_ui.dispatch(InspectorAction::PanelDragEnd);
                }));
            }
            move || drop(listeners)
        });
    }

    if !ui.state.is_active() {
        let on_activate = {
            let ui = ui.clone();
            Callback::from(move |_: MouseEvent| ui.dispatch(InspectorAction::Activate))
        };
        return html! {
            <button class="inspector-toggle" onclick={on_activate}>
                { "🎨 עורך אלמנטים" }
            </button>
        };
    }

    html! { <InspectorPanel ui={ui} /> }
}
