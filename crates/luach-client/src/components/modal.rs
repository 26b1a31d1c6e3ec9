//! Common modal dialog, RTL layout.

use yew::prelude::*;

/// Props for the Modal component.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    /// Modal content.
    pub children: Children,
    pub onclose: Callback<()>,
    /// Whether clicking the overlay closes the modal.
    #[prop_or(false)]
    pub overlay_click_closes: bool,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_overlay_click = {
        let onclose = props.onclose.clone();
        let overlay_click_closes = props.overlay_click_closes;
        Callback::from(move |_: MouseEvent| {
            if overlay_click_closes {
                onclose.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_button_click = {
        let onclose = props.onclose.clone();
        Callback::from(move |_: MouseEvent| onclose.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="modal" dir="rtl" onclick={on_modal_click}>
                <div class="modal-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="modal-close-btn" onclick={on_close_button_click}>
                        { "×" }
                    </button>
                </div>
                <div class="modal-content">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
