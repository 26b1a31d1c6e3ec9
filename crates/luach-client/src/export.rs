//! CSV/JSON export of the loaded dashboard items via a temporary anchor.

use luach_shared::DashboardItem;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// CSV with the Hebrew column headers the table shows.
pub fn build_csv(items: &[DashboardItem]) -> String {
    let mut csv = String::from("אתר,סטטוס,תאריך,איש קשר,לקוח\n");
    for item in items {
        let row = [
            &item.site,
            &item.status,
            &item.date,
            &item.contact_name,
            &item.client_name,
        ]
        .map(|field| format!("\"{}\"", field.replace('"', "\"\"")));
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

pub fn download_csv(items: &[DashboardItem]) {
    trigger_download(
        "dashboard_data.csv",
        "text/csv;charset=utf-8",
        &build_csv(items),
    );
}

pub fn download_json(items: &[DashboardItem]) {
    let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
    trigger_download("dashboard_data.json", "application/json", &json);
}

/// Click a transient `<a download>` pointing at a data URI.
fn trigger_download(filename: &str, mime: &str, content: &str) {
    let encoded = String::from(js_sys::encode_uri_component(content));
    let href = format!("data:{mime},{encoded}");

    let document = gloo::utils::document();
    let Ok(anchor) = document.create_element("a") else {
        return;
    };
    let _ = anchor.set_attribute("href", &href);
    let _ = anchor.set_attribute("download", filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
    }
    if let Some(anchor) = anchor.dyn_ref::<HtmlElement>() {
        anchor.click();
    }
    anchor.remove();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_csv_quotes_fields_and_escapes_quotes() {
        let items = vec![DashboardItem {
            id: Uuid::nil(),
            site: "אתר".to_string(),
            status: "בטיפול".to_string(),
            date: "2024-01-15".to_string(),
            contact_name: "רמק ישג בע\"מ".to_string(),
            client_name: "לקוח".to_string(),
            created_at: Utc::now(),
        }];

        let csv = build_csv(&items);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("אתר,סטטוס,תאריך,איש קשר,לקוח"));
        assert_eq!(
            lines.next(),
            Some(r#""אתר","בטיפול","2024-01-15","רמק ישג בע""מ","לקוח""#)
        );
    }
}
