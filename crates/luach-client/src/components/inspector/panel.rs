//! Floating control panel: style/text/position tabs, reset and clear
//! actions, draggable from its header.

use luach_core::{MoveDirection, StyleProperty};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::{InspectorAction, InspectorUi};

/// Class put on the panel root; click/hover handlers use it to ignore the
/// inspector's own DOM.
pub const PANEL_CLASS: &str = "element-inspector-panel";

/// Preset background gradients offered in the style tab.
const GRADIENT_OPTIONS: [(&str, &str); 8] = [
    ("ירוק", "linear-gradient(135deg, #10b981, #059669)"),
    ("כתום", "linear-gradient(135deg, #f97316, #ea580c)"),
    ("כחול", "linear-gradient(135deg, #3b82f6, #2563eb)"),
    ("תכלת", "linear-gradient(135deg, #06b6d4, #0891b2)"),
    ("ורוד", "linear-gradient(135deg, #ec4899, #db2777)"),
    ("סגול", "linear-gradient(135deg, #8b5cf6, #7c3aed)"),
    ("גרדיאנט דוח", "linear-gradient(135deg, #10b981, #3b82f6)"),
    ("גרדיאנט אקסל", "linear-gradient(135deg, #f97316, #10b981)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelTab {
    Style,
    Text,
    Position,
}

#[derive(Properties, PartialEq)]
pub struct InspectorPanelProps {
    pub ui: UseReducerHandle<InspectorUi>,
}

#[function_component(InspectorPanel)]
pub fn inspector_panel(props: &InspectorPanelProps) -> Html {
    let ui = props.ui.clone();
    let tab = use_state(|| PanelTab::Style);

    let dragging = ui.panel.is_dragging();
    let (x, y) = ui.panel.position;
    let panel_style = format!(
        "left: {x}px; top: {y}px; cursor: {}; transform: {};",
        if dragging { "grabbing" } else { "grab" },
        if dragging { "scale(1.02)" } else { "scale(1)" },
    );

    let on_header_mousedown = {
        let ui = ui.clone();
        Callback::from(move |e: MouseEvent| {
            ui.dispatch(InspectorAction::PanelDragStart {
                pointer: (f64::from(e.client_x()), f64::from(e.client_y())),
            });
        })
    };

    let on_close = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(InspectorAction::Deactivate))
    };

    let on_clear = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(InspectorAction::ClearSelection))
    };

    let on_reset = {
        let ui = ui.clone();
        Callback::from(move |_: MouseEvent| ui.dispatch(InspectorAction::ResetSelected))
    };

    // Text inputs: apply the raw (or suffixed) value on every keystroke
    let style_input = {
        let ui = ui.clone();
        move |prop: StyleProperty, suffix: &'static str| {
            let ui = ui.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let value = format!("{}{suffix}", input.value());
                ui.dispatch(InspectorAction::ApplyStyle(prop, value));
            })
        }
    };

    let style_select = {
        let ui = ui.clone();
        move |prop: StyleProperty| {
            let ui = ui.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let value = select.value();
                if !value.is_empty() {
                    ui.dispatch(InspectorAction::ApplyStyle(prop, value));
                }
            })
        }
    };

    let on_move = {
        let ui = ui.clone();
        move |direction: MoveDirection| {
            let ui = ui.clone();
            Callback::from(move |_: MouseEvent| ui.dispatch(InspectorAction::Move(direction)))
        }
    };

    let on_text_input = {
        let ui = ui.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ui.dispatch(InspectorAction::ApplyText(input.value()));
        })
    };

    let select_tab = |target: PanelTab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };
    let tab_class = |target: PanelTab| {
        if *tab == target {
            "inspector-tab inspector-tab-active"
        } else {
            "inspector-tab"
        }
    };

    let selection = ui.state.selection();
    let multi_count = ui.state.multi().len();
    let has_target = selection.is_some() || multi_count > 0;

    let background_color = ui
        .state
        .edited_value(StyleProperty::BackgroundColor)
        .unwrap_or("#ffffff")
        .to_string();
    let text_color = ui
        .state
        .edited_value(StyleProperty::Color)
        .unwrap_or("#000000")
        .to_string();

    html! {
        <div class={PANEL_CLASS} dir="rtl" style={panel_style}>
            <div class="inspector-header" onmousedown={on_header_mousedown}>
                <span class="inspector-title">{ "🎨 עורך אלמנטים מתקדם" }</span>
                <button
                    class="inspector-close"
                    onmousedown={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    onclick={on_close}
                >
                    <Icon data={IconData::LUCIDE_X} width="16px" height="16px" />
                </button>
                <p class="inspector-subtitle">
                    <span>{ "עריכה בזמן אמת עם בקרות מתקדמות" }</span>
                    <span class="inspector-hint">{ "🔄 ניתן לגרירה" }</span>
                </p>
            </div>

            <div class="inspector-body">
                { if multi_count > 0 {
                    html! {
                        <div class="inspector-multi-info">
                            <h3>{ format!("✨ נבחרו {multi_count} אלמנטים") }</h3>
                            <p>{ "שינויים יחולו על כל האלמנטים הנבחרים בו זמנית" }</p>
                            <button class="btn-outline" onclick={on_clear.clone()}>
                                { "🗑️ נקה בחירה מרובה" }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}

                { if !has_target {
                    html! {
                        <div class="inspector-welcome">
                            <p class="inspector-welcome-title">{ "🎯 ברוכים הבאים לעורך" }</p>
                            <ul class="inspector-welcome-hints">
                                <li>{ "ריחוף עם עכבר - מסגרת כחולה" }</li>
                                <li>{ "לחיצה רגילה - עריכת אלמנט" }</li>
                                <li>{ "Ctrl + לחיצה - פונקציה מקורית" }</li>
                                <li>{ "Shift + לחיצה - בחירה מרובה" }</li>
                            </ul>
                        </div>
                    }
                } else {
                    html! {
                        <div>
                            { if let Some(selection) = selection {
                                let tag = selection.handle.tag_name().to_lowercase();
                                let classes = selection.handle.class_name();
                                html! {
                                    <div class="inspector-selected-info">
                                        <h3>{ "🎯 אלמנט נבחר" }</h3>
                                        <p class="inspector-selected-tag">{ tag }</p>
                                        { if classes.is_empty() {
                                            html! {}
                                        } else {
                                            html! { <p class="inspector-selected-classes">{ format!("קלאסים: {classes}") }</p> }
                                        }}
                                    </div>
                                }
                            } else {
                                html! {}
                            }}

                            <div class="inspector-tabs">
                                <button class={tab_class(PanelTab::Style)} onclick={select_tab(PanelTab::Style)}>
                                    <Icon data={IconData::LUCIDE_PALETTE} width="14px" height="14px" />
                                    { "🎨 עיצוב" }
                                </button>
                                <button class={tab_class(PanelTab::Text)} onclick={select_tab(PanelTab::Text)}>
                                    <Icon data={IconData::LUCIDE_TYPE} width="14px" height="14px" />
                                    { "✏️ טקסט" }
                                </button>
                                <button class={tab_class(PanelTab::Position)} onclick={select_tab(PanelTab::Position)}>
                                    <Icon data={IconData::LUCIDE_MOVE} width="14px" height="14px" />
                                    { "📐 מיקום" }
                                </button>
                            </div>

                            { match *tab {
                                PanelTab::Style => html! {
                                    <div class="inspector-tab-content">
                                        <h4>{ "צבעים ורקע" }</h4>
                                        <label>{ "גרדיאנט רקע" }
                                            <select onchange={style_select(StyleProperty::Background)}>
                                                <option value="" selected={true}>{ "בחר גרדיאנט" }</option>
                                                { for GRADIENT_OPTIONS.iter().map(|(name, value)| html! {
                                                    <option value={*value}>{ *name }</option>
                                                }) }
                                            </select>
                                        </label>
                                        <div class="inspector-grid-2">
                                            <label>{ "צבע רקע" }
                                                <input
                                                    type="color"
                                                    value={background_color}
                                                    oninput={style_input(StyleProperty::BackgroundColor, "")}
                                                />
                                            </label>
                                            <label>{ "צבע טקסט" }
                                                <input
                                                    type="color"
                                                    value={text_color}
                                                    oninput={style_input(StyleProperty::Color, "")}
                                                />
                                            </label>
                                        </div>

                                        <h4>{ "טיפוגרפיה" }</h4>
                                        <div class="inspector-grid-2">
                                            <label>{ "גודל גופן" }
                                                <input
                                                    type="number"
                                                    placeholder="16"
                                                    oninput={style_input(StyleProperty::FontSize, "px")}
                                                />
                                            </label>
                                            <label>{ "עובי גופן" }
                                                <select onchange={style_select(StyleProperty::FontWeight)}>
                                                    <option value="" selected={true}>{ "עובי" }</option>
                                                    <option value="normal">{ "רגיל" }</option>
                                                    <option value="bold">{ "מודגש" }</option>
                                                    <option value="600">{ "חצי מודגש" }</option>
                                                    <option value="300">{ "דק" }</option>
                                                </select>
                                            </label>
                                        </div>

                                        <h4>{ "עיצוב ומבנה" }</h4>
                                        <div class="inspector-grid-2">
                                            <label>{ "רדיוס פינות" }
                                                <input
                                                    type="number"
                                                    placeholder="8"
                                                    oninput={style_input(StyleProperty::BorderRadius, "px")}
                                                />
                                            </label>
                                            <label>{ "ריפוד פנימי" }
                                                <input
                                                    type="text"
                                                    placeholder="10px"
                                                    oninput={style_input(StyleProperty::Padding, "")}
                                                />
                                            </label>
                                        </div>
                                    </div>
                                },
                                PanelTab::Text => html! {
                                    <div class="inspector-tab-content">
                                        <label>{ "תוכן הטקסט" }
                                            <input
                                                value={ui.edited_text.clone()}
                                                oninput={on_text_input}
                                                placeholder="הזן טקסט..."
                                            />
                                        </label>
                                    </div>
                                },
                                PanelTab::Position => html! {
                                    <div class="inspector-tab-content">
                                        <h4>{ "הזזת אלמנט" }</h4>
                                        <div class="inspector-move-grid">
                                            <span />
                                            <button onclick={on_move(MoveDirection::Up)}>{ "↑" }</button>
                                            <span />
                                            <button onclick={on_move(MoveDirection::Left)}>{ "←" }</button>
                                            <span class="inspector-move-label">{ "הזז" }</span>
                                            <button onclick={on_move(MoveDirection::Right)}>{ "→" }</button>
                                            <span />
                                            <button onclick={on_move(MoveDirection::Down)}>{ "↓" }</button>
                                            <span />
                                        </div>

                                        <h4>{ "גודל אלמנט" }</h4>
                                        <div class="inspector-grid-2">
                                            <label>{ "רוחב" }
                                                <input
                                                    type="text"
                                                    placeholder="auto"
                                                    oninput={style_input(StyleProperty::Width, "")}
                                                />
                                            </label>
                                            <label>{ "גובה" }
                                                <input
                                                    type="text"
                                                    placeholder="auto"
                                                    oninput={style_input(StyleProperty::Height, "")}
                                                />
                                            </label>
                                        </div>
                                    </div>
                                },
                            }}

                            <div class="inspector-actions">
                                <button class="btn-reset" onclick={on_reset}>
                                    { "🔄 איפוס שינויים" }
                                </button>
                                <button class="btn-clear" onclick={on_clear}>
                                    { "❌ בטל כל בחירה" }
                                </button>
                            </div>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
