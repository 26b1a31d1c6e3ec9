//! File-backed store: in-memory semantics with write-through JSON
//! persistence. Stands in for the original deployment's relational backend;
//! the whole data set is small enough to rewrite on every mutation.

use std::fs;
use std::path::PathBuf;

use luach_shared::{
    DashboardItem, NewDashboardItem, NewProgressGroup, ProgressGroup, UpdateDashboardItem,
    UpdateProgressGroup,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::storage::{
    Storage, StorageError, build_dashboard_item, build_progress_group,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct DataFile {
    dashboard_items: Vec<DashboardItem>,
    progress_groups: Vec<ProgressGroup>,
}

pub struct FileStore {
    path: PathBuf,
    data: RwLock<DataFile>,
}

impl FileStore {
    /// Open (or create) the store at `path`, loading any existing data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let data = if path.exists() {
            serde_json::from_slice(&fs::read(&path)?)?
        } else {
            DataFile::default()
        };
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Write the full data set out; temp-file-then-rename so a crash mid-write
    /// never leaves a truncated file behind.
    fn persist(&self, data: &DataFile) -> Result<(), StorageError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(data)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Storage for FileStore {
    fn dashboard_items(&self) -> Result<Vec<DashboardItem>, StorageError> {
        Ok(self.data.read().dashboard_items.clone())
    }

    fn create_dashboard_item(
        &self,
        new: NewDashboardItem,
    ) -> Result<DashboardItem, StorageError> {
        let item = build_dashboard_item(new);
        let mut data = self.data.write();
        data.dashboard_items.push(item.clone());
        self.persist(&data)?;
        Ok(item)
    }

    fn update_dashboard_item(
        &self,
        id: Uuid,
        patch: &UpdateDashboardItem,
    ) -> Result<Option<DashboardItem>, StorageError> {
        let mut data = self.data.write();
        let Some(item) = data.dashboard_items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        patch.apply(item);
        let item = item.clone();
        self.persist(&data)?;
        Ok(Some(item))
    }

    fn delete_dashboard_item(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut data = self.data.write();
        let before = data.dashboard_items.len();
        data.dashboard_items.retain(|item| item.id != id);
        if data.dashboard_items.len() == before {
            return Ok(false);
        }
        self.persist(&data)?;
        Ok(true)
    }

    fn progress_groups(&self) -> Result<Vec<ProgressGroup>, StorageError> {
        Ok(self.data.read().progress_groups.clone())
    }

    fn create_progress_group(
        &self,
        new: NewProgressGroup,
    ) -> Result<ProgressGroup, StorageError> {
        let group = build_progress_group(new);
        let mut data = self.data.write();
        data.progress_groups.push(group.clone());
        self.persist(&data)?;
        Ok(group)
    }

    fn update_progress_group(
        &self,
        id: Uuid,
        patch: &UpdateProgressGroup,
    ) -> Result<Option<ProgressGroup>, StorageError> {
        let mut data = self.data.write();
        let Some(group) = data.progress_groups.iter_mut().find(|group| group.id == id) else {
            return Ok(None);
        };
        patch.apply(group);
        let group = group.clone();
        self.persist(&data)?;
        Ok(Some(group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item() -> NewDashboardItem {
        NewDashboardItem {
            site: "אתר חברת ABC".to_string(),
            status: "בטיפול".to_string(),
            date: "2024-01-15".to_string(),
            contact_name: "יוסי כהן".to_string(),
            client_name: "חברת ABC".to_string(),
        }
    }

    #[test]
    fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("luach.json");

        let created = {
            let store = FileStore::open(&path).unwrap();
            store.create_dashboard_item(new_item()).unwrap()
        };

        let reopened = FileStore::open(&path).unwrap();
        let items = reopened.dashboard_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, created.id);
        assert_eq!(items[0].site, "אתר חברת ABC");
    }

    #[test]
    fn test_delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("luach.json");

        let store = FileStore::open(&path).unwrap();
        let item = store.create_dashboard_item(new_item()).unwrap();
        assert!(store.delete_dashboard_item(item.id).unwrap());

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.dashboard_items().unwrap().is_empty());
    }
}
