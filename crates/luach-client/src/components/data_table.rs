//! Dashboard items table with per-status badge colors.

use luach_shared::DashboardItem;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub data: Vec<DashboardItem>,
    #[prop_or_default]
    pub on_edit: Callback<DashboardItem>,
}

fn status_class(status: &str) -> &'static str {
    match status {
        "הושלם" => "status-badge status-done",
        "בטיפול" => "status-badge status-working",
        "נדרש טיפול" => "status-badge status-attention",
        "בביקורת" => "status-badge status-review",
        _ => "status-badge status-default",
    }
}

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    html! {
        <div class="card data-table-wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "אתר" }</th>
                        <th>{ "סטטוס" }</th>
                        <th>{ "תאריך קורא" }</th>
                        <th>{ "שם הקשובה" }</th>
                        <th>{ "שם הלקוח" }</th>
                        <th>{ "פעולה" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.data.iter().map(|item| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let item = item.clone();
                            Callback::from(move |_| on_edit.emit(item.clone()))
                        };
                        html! {
                            <tr key={item.id.to_string()}>
                                <td>{ &item.site }</td>
                                <td>
                                    <span class={status_class(&item.status)}>
                                        { &item.status }
                                    </span>
                                </td>
                                <td>{ &item.date }</td>
                                <td>{ &item.contact_name }</td>
                                <td>{ &item.client_name }</td>
                                <td>
                                    <button class="btn-edit" onclick={on_edit}>
                                        <Icon data={IconData::LUCIDE_PENCIL} width="14px" height="14px" />
                                        { "עריכה" }
                                    </button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
