//! Add/edit form for a dashboard item.

use luach_shared::{DashboardItem, NewDashboardItem};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// The four statuses the dashboard knows.
const STATUS_OPTIONS: [&str; 4] = ["בטיפול", "הושלם", "נדרש טיפול", "בביקורת"];

#[derive(Properties, PartialEq)]
pub struct ItemFormProps {
    /// Pre-filled values when editing an existing item.
    #[prop_or_default]
    pub initial: Option<DashboardItem>,
    pub submit_label: AttrValue,
    pub onsubmit: Callback<NewDashboardItem>,
    pub oncancel: Callback<()>,
}

#[function_component(ItemForm)]
pub fn item_form(props: &ItemFormProps) -> Html {
    let initial = props.initial.as_ref();
    let site = use_state(|| initial.map(|i| i.site.clone()).unwrap_or_default());
    let status = use_state(|| initial.map(|i| i.status.clone()).unwrap_or_default());
    let date = use_state(|| initial.map(|i| i.date.clone()).unwrap_or_default());
    let contact_name = use_state(|| initial.map(|i| i.contact_name.clone()).unwrap_or_default());
    let client_name = use_state(|| initial.map(|i| i.client_name.clone()).unwrap_or_default());
    let error = use_state(|| None::<String>);

    let on_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_status_change = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(select.value());
        })
    };

    let on_submit = {
        let (site, status, date) = (site.clone(), status.clone(), date.clone());
        let (contact_name, client_name) = (contact_name.clone(), client_name.clone());
        let error = error.clone();
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = NewDashboardItem {
                site: (*site).clone(),
                status: (*status).clone(),
                date: (*date).clone(),
                contact_name: (*contact_name).clone(),
                client_name: (*client_name).clone(),
            };
            if payload.validate().is_err() {
                error.set(Some("נא למלא את כל השדות".to_string()));
                return;
            }
            error.set(None);
            onsubmit.emit(payload);
        })
    };

    let on_cancel = {
        let oncancel = props.oncancel.clone();
        Callback::from(move |_: MouseEvent| oncancel.emit(()))
    };

    html! {
        <form class="item-form" onsubmit={on_submit}>
            <label>{ "אתר" }
                <input
                    value={(*site).clone()}
                    oninput={on_input(site.clone())}
                    placeholder="הזן שם האתר"
                />
            </label>
            <label>{ "סטטוס" }
                <select onchange={on_status_change}>
                    <option value="" selected={status.is_empty()}>{ "בחר סטטוס" }</option>
                    { for STATUS_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={*status == *option}>{ *option }</option>
                    }) }
                </select>
            </label>
            <label>{ "תאריך" }
                <input
                    type="date"
                    value={(*date).clone()}
                    oninput={on_input(date.clone())}
                />
            </label>
            <label>{ "שם איש קשר" }
                <input
                    value={(*contact_name).clone()}
                    oninput={on_input(contact_name.clone())}
                    placeholder="הזן שם איש הקשר"
                />
            </label>
            <label>{ "שם הלקוח" }
                <input
                    value={(*client_name).clone()}
                    oninput={on_input(client_name.clone())}
                    placeholder="הזן שם הלקוח"
                />
            </label>
            { if let Some(error) = &*error {
                html! { <p class="form-error">{ error }</p> }
            } else {
                html! {}
            }}
            <div class="form-actions">
                <button type="button" class="btn-outline" onclick={on_cancel}>
                    { "ביטול" }
                </button>
                <button type="submit" class="btn-primary">
                    { props.submit_label.clone() }
                </button>
            </div>
        </form>
    }
}
