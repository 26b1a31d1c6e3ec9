//! Transient notification, auto-dismissed after a few seconds.

use yew::prelude::*;

const TOAST_DURATION_MS: u32 = 3000;

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub body: String,
    pub is_error: bool,
}

impl ToastMessage {
    pub fn info(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            is_error: true,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub onclose: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let dismiss_timer = use_mut_ref(|| None::<gloo::timers::callback::Timeout>);

    {
        let onclose = props.onclose.clone();
        use_effect_with(props.message.clone(), move |message| {
            *dismiss_timer.borrow_mut() = message.as_ref().map(|_| {
                gloo::timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
                    onclose.emit(());
                })
            });
        });
    }

    let Some(message) = &props.message else {
        return html! {};
    };

    let class = if message.is_error {
        "toast toast-error"
    } else {
        "toast"
    };

    html! {
        <div class={class} dir="rtl">
            <strong>{ &message.title }</strong>
            <p>{ &message.body }</p>
        </div>
    }
}
