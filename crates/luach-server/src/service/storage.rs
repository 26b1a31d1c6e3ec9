//! Storage service: the capability set over the two dashboard collections.

use chrono::Utc;
use luach_shared::{
    DashboardItem, NewDashboardItem, NewProgressGroup, ProgressGroup, UpdateDashboardItem,
    UpdateProgressGroup,
};
use parking_lot::RwLock;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to persist data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode data file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// CRUD capability set over dashboard items and progress groups.
///
/// Implementations must preserve insertion order in the listing calls.
pub trait Storage: Send + Sync {
    fn dashboard_items(&self) -> Result<Vec<DashboardItem>, StorageError>;
    fn create_dashboard_item(&self, new: NewDashboardItem)
    -> Result<DashboardItem, StorageError>;
    fn update_dashboard_item(
        &self,
        id: Uuid,
        patch: &UpdateDashboardItem,
    ) -> Result<Option<DashboardItem>, StorageError>;
    fn delete_dashboard_item(&self, id: Uuid) -> Result<bool, StorageError>;

    fn progress_groups(&self) -> Result<Vec<ProgressGroup>, StorageError>;
    fn create_progress_group(&self, new: NewProgressGroup)
    -> Result<ProgressGroup, StorageError>;
    fn update_progress_group(
        &self,
        id: Uuid,
        patch: &UpdateProgressGroup,
    ) -> Result<Option<ProgressGroup>, StorageError>;
}

pub fn build_dashboard_item(new: NewDashboardItem) -> DashboardItem {
    DashboardItem {
        id: Uuid::new_v4(),
        site: new.site,
        status: new.status,
        date: new.date,
        contact_name: new.contact_name,
        client_name: new.client_name,
        created_at: Utc::now(),
    }
}

pub fn build_progress_group(new: NewProgressGroup) -> ProgressGroup {
    ProgressGroup {
        id: Uuid::new_v4(),
        name: new.name,
        completed: new.completed,
        total: new.total,
        percentage: new.percentage,
    }
}

/// In-memory store. Collections are plain insertion-ordered vectors behind
/// `parking_lot` locks; lookups are linear over dashboard-sized data.
#[derive(Default)]
pub struct MemStore {
    items: RwLock<Vec<DashboardItem>>,
    groups: RwLock<Vec<ProgressGroup>>,
}

impl Storage for MemStore {
    fn dashboard_items(&self) -> Result<Vec<DashboardItem>, StorageError> {
        Ok(self.items.read().clone())
    }

    fn create_dashboard_item(
        &self,
        new: NewDashboardItem,
    ) -> Result<DashboardItem, StorageError> {
        let item = build_dashboard_item(new);
        self.items.write().push(item.clone());
        Ok(item)
    }

    fn update_dashboard_item(
        &self,
        id: Uuid,
        patch: &UpdateDashboardItem,
    ) -> Result<Option<DashboardItem>, StorageError> {
        let mut items = self.items.write();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        patch.apply(item);
        Ok(Some(item.clone()))
    }

    fn delete_dashboard_item(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }

    fn progress_groups(&self) -> Result<Vec<ProgressGroup>, StorageError> {
        Ok(self.groups.read().clone())
    }

    fn create_progress_group(
        &self,
        new: NewProgressGroup,
    ) -> Result<ProgressGroup, StorageError> {
        let group = build_progress_group(new);
        self.groups.write().push(group.clone());
        Ok(group)
    }

    fn update_progress_group(
        &self,
        id: Uuid,
        patch: &UpdateProgressGroup,
    ) -> Result<Option<ProgressGroup>, StorageError> {
        let mut groups = self.groups.write();
        let Some(group) = groups.iter_mut().find(|group| group.id == id) else {
            return Ok(None);
        };
        patch.apply(group);
        Ok(Some(group.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(site: &str) -> NewDashboardItem {
        NewDashboardItem {
            site: site.to_string(),
            status: "בטיפול".to_string(),
            date: "2024-01-15".to_string(),
            contact_name: "יוסי כהן".to_string(),
            client_name: "חברת ABC".to_string(),
        }
    }

    #[test]
    fn test_create_assigns_unique_ids_and_preserves_order() {
        let store = MemStore::default();
        let first = store.create_dashboard_item(new_item("א")).unwrap();
        let second = store.create_dashboard_item(new_item("ב")).unwrap();
        assert_ne!(first.id, second.id);

        let listed = store.dashboard_items().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].site, "א");
        assert_eq!(listed[1].site, "ב");
    }

    #[test]
    fn test_update_missing_item_is_none() {
        let store = MemStore::default();
        let patch = UpdateDashboardItem {
            status: Some("הושלם".to_string()),
            ..UpdateDashboardItem::default()
        };
        assert!(
            store
                .update_dashboard_item(Uuid::new_v4(), &patch)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_delete_is_false_on_second_call() {
        let store = MemStore::default();
        let item = store.create_dashboard_item(new_item("א")).unwrap();
        assert!(store.delete_dashboard_item(item.id).unwrap());
        assert!(!store.delete_dashboard_item(item.id).unwrap());
    }

    #[test]
    fn test_group_update_merges() {
        let store = MemStore::default();
        let group = store
            .create_progress_group(NewProgressGroup {
                name: "קבוצת פנייה א".to_string(),
                completed: 0,
                total: 10,
                percentage: 0,
            })
            .unwrap();

        let patch = UpdateProgressGroup {
            completed: Some(10),
            percentage: Some(100),
            ..UpdateProgressGroup::default()
        };
        let updated = store
            .update_progress_group(group.id, &patch)
            .unwrap()
            .unwrap();
        assert_eq!(updated.completed, 10);
        assert_eq!(updated.total, 10);
        assert_eq!(updated.percentage, 100);
    }
}
