//! Sample Hebrew dashboard data for an empty store.

use luach_shared::{NewDashboardItem, NewProgressGroup};

use super::storage::{Storage, StorageError};

fn sample_items() -> Vec<NewDashboardItem> {
    let rows = [
        ("אתר חברת ABC", "בטיפול", "2024-01-15", "יוסי כהן", "חברת ABC בע\"ם"),
        ("פורטל לקוחות XYZ", "בטיפול", "2024-01-20", "רחל לוי", "XYZ טכנולוגיות"),
        ("חנות אונליין DEF", "הושלם", "2024-01-10", "מישה דוד", "DEF מסחר דיגיטלי"),
        ("מערכת ניהול GHI", "נדרש טיפול", "2024-01-25", "שרה אברהם", "GHI ייעוץ עסקי"),
        ("אפליקציית JKL", "בביקורת", "2024-01-12", "דני רוזן", "JKL חדשנות דיגיטלית"),
    ];
    rows.into_iter()
        .map(|(site, status, date, contact_name, client_name)| NewDashboardItem {
            site: site.to_string(),
            status: status.to_string(),
            date: date.to_string(),
            contact_name: contact_name.to_string(),
            client_name: client_name.to_string(),
        })
        .collect()
}

fn sample_groups() -> Vec<NewProgressGroup> {
    let rows = [
        ("פיתוח תכונות חדשות", 8, 12, 67),
        ("בדיקות איכות", 15, 20, 75),
        ("תיעוד מערכת", 5, 8, 63),
        ("אופטימיזציה", 3, 6, 50),
    ];
    rows.into_iter()
        .map(|(name, completed, total, percentage)| NewProgressGroup {
            name: name.to_string(),
            completed,
            total,
            percentage,
        })
        .collect()
}

/// Seed the store with the sample records, but only when both collections
/// are empty (a file-backed store keeps whatever it already has).
pub fn seed_if_empty(storage: &dyn Storage) -> Result<(), StorageError> {
    if !storage.dashboard_items()?.is_empty() || !storage.progress_groups()?.is_empty() {
        return Ok(());
    }

    let items = sample_items();
    let groups = sample_groups();
    let (item_count, group_count) = (items.len(), groups.len());

    for item in items {
        storage.create_dashboard_item(item)?;
    }
    for group in groups {
        storage.create_progress_group(group)?;
    }

    tracing::info!("Seeded {item_count} dashboard items and {group_count} progress groups");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::storage::MemStore;

    #[test]
    fn test_seed_fills_empty_store_once() {
        let store = MemStore::default();
        seed_if_empty(&store).unwrap();

        assert_eq!(store.dashboard_items().unwrap().len(), 5);
        assert_eq!(store.progress_groups().unwrap().len(), 4);

        // A second run must not duplicate anything
        seed_if_empty(&store).unwrap();
        assert_eq!(store.dashboard_items().unwrap().len(), 5);
    }

    #[test]
    fn test_seed_preserves_sample_order() {
        let store = MemStore::default();
        seed_if_empty(&store).unwrap();

        let items = store.dashboard_items().unwrap();
        assert_eq!(items[0].site, "אתר חברת ABC");
        assert_eq!(items[4].site, "אפליקציית JKL");

        let groups = store.progress_groups().unwrap();
        assert_eq!(groups[0].name, "פיתוח תכונות חדשות");
        assert_eq!(groups[0].percentage, 67);
    }
}
