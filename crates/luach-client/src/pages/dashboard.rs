//! The dashboard page: action buttons, filters, progress cards, the items
//! table, add/edit dialogs, and the element inspector toggle.

use luach_shared::{DashboardItem, NewDashboardItem, ProgressGroup, UpdateDashboardItem};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::api;
use crate::components::{
    DataTable, ElementInspector, GradientButton, GradientKind, ItemForm, Modal, ProgressCard,
    Toast, ToastMessage,
};
use crate::export;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let items = use_state(Vec::<DashboardItem>::new);
    let groups = use_state(Vec::<ProgressGroup>::new);
    let loading = use_state(|| true);
    let toast = use_state(|| None::<ToastMessage>);
    let add_open = use_state(|| false);
    let editing = use_state(|| None::<DashboardItem>);

    // Store-and-refetch: mutations reload the collections on success
    let reload = {
        let items = items.clone();
        let groups = groups.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        Callback::from(move |_: ()| {
            let items = items.clone();
            let groups = groups.clone();
            let loading = loading.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match api::fetch_dashboard_items().await {
                    Ok(fetched) => items.set(fetched),
                    Err(err) => {
                        tracing::error!("failed to load dashboard items: {err}");
                        toast.set(Some(ToastMessage::error("שגיאת רשת", "טעינת הפריטים נכשלה")));
                    }
                }
                match api::fetch_progress_groups().await {
                    Ok(fetched) => groups.set(fetched),
                    Err(err) => {
                        tracing::error!("failed to load progress groups: {err}");
                        toast.set(Some(ToastMessage::error("שגיאת רשת", "טעינת הקבוצות נכשלה")));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    let show_toast = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };
    let on_toast_close = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let toast_button = |title: &'static str, body: &'static str| {
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| show_toast.emit(ToastMessage::info(title, body)))
    };

    let on_excel_export = {
        let items = items.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| {
            export::download_csv(&items);
            show_toast.emit(ToastMessage::info("יצוא Excel", "הקובץ הורד בהצלחה"));
        })
    };
    let on_csv_export = {
        let items = items.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |_: MouseEvent| {
            export::download_json(&items);
            show_toast.emit(ToastMessage::info("יצוא CSV", "הקובץ הורד בהצלחה"));
        })
    };

    let on_add_open = {
        let add_open = add_open.clone();
        Callback::from(move |_: MouseEvent| add_open.set(true))
    };
    let on_add_close = {
        let add_open = add_open.clone();
        Callback::from(move |_: ()| add_open.set(false))
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |item: DashboardItem| editing.set(Some(item)))
    };
    let on_edit_close = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let on_add_submit = {
        let add_open = add_open.clone();
        let show_toast = show_toast.clone();
        let reload = reload.clone();
        Callback::from(move |new: NewDashboardItem| {
            let add_open = add_open.clone();
            let show_toast = show_toast.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::create_dashboard_item(&new).await {
                    Ok(_) => {
                        add_open.set(false);
                        show_toast.emit(ToastMessage::info("נוסף בהצלחה", "הפריט נוסף למערכת"));
                        reload.emit(());
                    }
                    Err(err) => {
                        tracing::error!("failed to create item: {err}");
                        show_toast.emit(ToastMessage::error("שגיאה", "הוספת הפריט נכשלה"));
                    }
                }
            });
        })
    };

    let on_edit_submit = {
        let editing = editing.clone();
        let show_toast = show_toast.clone();
        let reload = reload.clone();
        Callback::from(move |new: NewDashboardItem| {
            let Some(item) = (*editing).clone() else {
                return;
            };
            let patch = UpdateDashboardItem {
                site: Some(new.site),
                status: Some(new.status),
                date: Some(new.date),
                contact_name: Some(new.contact_name),
                client_name: Some(new.client_name),
            };
            let editing = editing.clone();
            let show_toast = show_toast.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::update_dashboard_item(item.id, &patch).await {
                    Ok(_) => {
                        editing.set(None);
                        show_toast.emit(ToastMessage::info("עודכן בהצלחה", "הפריט עודכן במערכת"));
                        reload.emit(());
                    }
                    Err(err) => {
                        tracing::error!("failed to update item: {err}");
                        show_toast.emit(ToastMessage::error("שגיאה", "עדכון הפריט נכשל"));
                    }
                }
            });
        })
    };

    if *loading {
        return html! {
            <div class="dashboard-loading" dir="rtl">
                <div class="spinner" />
                <p>{ "טוען נתונים..." }</p>
            </div>
        };
    }

    html! {
        <div class="dashboard" dir="rtl">
            <div class="card dashboard-header">
                <h1>{ "ניהול מתקדמים לכל הלקוח" }</h1>
                <div class="dashboard-actions">
                    <GradientButton
                        kind={GradientKind::Overview}
                        onclick={toast_button("סקירה כללית", "מציג דוח סקירה כולל של המערכת")}
                    >
                        <Icon data={IconData::LUCIDE_EYE} width="16px" height="16px" />
                        <span>{ "סקירה כללית" }</span>
                    </GradientButton>
                    <GradientButton
                        kind={GradientKind::Build}
                        onclick={toast_button("בנייה קריאה", "יוצר דוח בנייה מתקדם")}
                    >
                        <Icon data={IconData::LUCIDE_DOWNLOAD} width="16px" height="16px" />
                        <span>{ "בנייה קריאה" }</span>
                    </GradientButton>
                    <GradientButton kind={GradientKind::Excel} onclick={on_excel_export}>
                        <Icon data={IconData::LUCIDE_DOWNLOAD} width="16px" height="16px" />
                        <span>{ "Excel יצוא" }</span>
                    </GradientButton>
                    <GradientButton kind={GradientKind::Csv} onclick={on_csv_export}>
                        <Icon data={IconData::LUCIDE_DOWNLOAD} width="16px" height="16px" />
                        <span>{ "CSV יצוא" }</span>
                    </GradientButton>
                    <GradientButton
                        kind={GradientKind::Settings}
                        onclick={toast_button("הגדרות יצוא", "פותח חלון הגדרות יצוא מתקדמות")}
                    >
                        <Icon data={IconData::LUCIDE_SETTINGS} width="16px" height="16px" />
                        <span>{ "הגדרות יצוא" }</span>
                    </GradientButton>
                    <GradientButton
                        kind={GradientKind::Advanced}
                        onclick={toast_button("מצב עריכה מתקדם", "לחץ על כפתור העורך בתחתית המסך כדי להפעיל עריכת אלמנטים בזמן אמת")}
                    >
                        <Icon data={IconData::LUCIDE_COG} width="16px" height="16px" />
                        <span>{ "הגדרות מתקדמות" }</span>
                    </GradientButton>
                </div>
            </div>

            <div class="card dashboard-filters">
                <div class="filter-row">
                    <label>{ "תאריך התחלה" }
                        <input type="date" />
                    </label>
                    <label>{ "תאריך סיום" }
                        <input type="date" />
                    </label>
                    <label>{ "שם התחלה" }
                        <input type="text" placeholder="הזן שם התחלה" />
                    </label>
                    <label>{ "שם סיום" }
                        <input type="text" placeholder="הזן שם סיום" />
                    </label>
                    <label>{ "היסטוריה מעודכנת" }
                        <select>
                            <option value="latest">{ "אחרון" }</option>
                            <option value="week">{ "שבוע אחרון" }</option>
                            <option value="month">{ "חודש אחרון" }</option>
                        </select>
                    </label>
                    <button class="btn-primary">
                        <Icon data={IconData::LUCIDE_FILTER} width="14px" height="14px" />
                        <span>{ "סינון" }</span>
                    </button>
                </div>
            </div>

            <div class="progress-grid">
                { for groups.iter().map(|group: &ProgressGroup| html! {
                    <ProgressCard
                        key={group.id.to_string()}
                        title={group.name.clone()}
                        completed={group.completed}
                        total={group.total}
                        percentage={group.percentage}
                    />
                }) }
            </div>

            <div class="dashboard-row-actions">
                <button
                    class="btn-green"
                    onclick={toast_button("הוסף משתמש", "פותח טופס הוספת משתמש חדש")}
                >
                    <Icon data={IconData::LUCIDE_USER_PLUS} width="16px" height="16px" />
                    <span>{ "הוסף משתמש" }</span>
                </button>
                <button class="btn-green" onclick={on_add_open}>
                    <Icon data={IconData::LUCIDE_PLUS} width="16px" height="16px" />
                    <span>{ "הוסף ירוק" }</span>
                </button>
                <button
                    class="btn-red"
                    onclick={toast_button("בטל הכנסה", "הפעולה בוטלה")}
                >
                    <Icon data={IconData::LUCIDE_X} width="16px" height="16px" />
                    <span>{ "בטל הכנסה" }</span>
                </button>
            </div>

            <DataTable data={(*items).clone()} on_edit={on_edit} />

            <div class="card dashboard-pagination">
                <span>{ format!("מציג 1-{} מתוך {} תוצאות", items.len(), items.len()) }</span>
            </div>

            <Modal open={*add_open} title="הוסף פריט חדש" onclose={on_add_close.clone()}>
                <ItemForm
                    submit_label="הוסף"
                    onsubmit={on_add_submit}
                    oncancel={on_add_close}
                />
            </Modal>

            <Modal
                open={editing.is_some()}
                title="ערוך פריט"
                onclose={on_edit_close.clone()}
            >
                { if let Some(item) = &*editing {
                    html! {
                        <ItemForm
                            initial={item.clone()}
                            submit_label="עדכן"
                            onsubmit={on_edit_submit}
                            oncancel={on_edit_close}
                        />
                    }
                } else {
                    html! {}
                }}
            </Modal>

            <Toast message={(*toast).clone()} onclose={on_toast_close} />
            <ElementInspector />
        </div>
    }
}
