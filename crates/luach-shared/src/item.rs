//! Dashboard item records: a site/engagement with status, date, and contacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{ValidationError, required_str, required_str_opt};

/// A stored dashboard item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardItem {
    pub id: Uuid,
    pub site: String,
    pub status: String,
    pub date: String,
    pub contact_name: String,
    pub client_name: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload: the item schema minus `id` and `createdAt`, which the
/// server assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDashboardItem {
    pub site: String,
    pub status: String,
    pub date: String,
    pub contact_name: String,
    pub client_name: String,
}

impl NewDashboardItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_str(&self.site, "site")?;
        required_str(&self.status, "status")?;
        required_str(&self.date, "date")?;
        required_str(&self.contact_name, "contactName")?;
        required_str(&self.client_name, "clientName")?;
        Ok(())
    }
}

/// Partial update payload. Absent fields leave the record untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDashboardItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl UpdateDashboardItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_str_opt(self.site.as_ref(), "site")?;
        required_str_opt(self.status.as_ref(), "status")?;
        required_str_opt(self.date.as_ref(), "date")?;
        required_str_opt(self.contact_name.as_ref(), "contactName")?;
        required_str_opt(self.client_name.as_ref(), "clientName")?;
        Ok(())
    }

    /// Merge the present fields into an existing record.
    pub fn apply(&self, item: &mut DashboardItem) {
        if let Some(site) = &self.site {
            item.site = site.clone();
        }
        if let Some(status) = &self.status {
            item.status = status.clone();
        }
        if let Some(date) = &self.date {
            item.date = date.clone();
        }
        if let Some(contact_name) = &self.contact_name {
            item.contact_name = contact_name.clone();
        }
        if let Some(client_name) = &self.client_name {
            item.client_name = client_name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewDashboardItem {
        NewDashboardItem {
            site: "אתר חברת ABC".to_string(),
            status: "בטיפול".to_string(),
            date: "2024-01-15".to_string(),
            contact_name: "יוסי כהן".to_string(),
            client_name: "חברת ABC בע\"ם".to_string(),
        }
    }

    #[test]
    fn test_new_item_validation() {
        assert!(sample_new().validate().is_ok());

        let mut missing_site = sample_new();
        missing_site.site = String::new();
        assert_eq!(
            missing_site.validate(),
            Err(ValidationError::EmptyField("site"))
        );
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(sample_new()).unwrap();
        assert!(json.get("contactName").is_some());
        assert!(json.get("clientName").is_some());
        assert!(json.get("contact_name").is_none());
    }

    #[test]
    fn test_partial_update_merges_present_fields_only() {
        let mut item = DashboardItem {
            id: Uuid::nil(),
            site: "אתר".to_string(),
            status: "בטיפול".to_string(),
            date: "2024-01-15".to_string(),
            contact_name: "יוסי".to_string(),
            client_name: "לקוח".to_string(),
            created_at: Utc::now(),
        };

        let patch: UpdateDashboardItem =
            serde_json::from_str(r#"{"status":"הושלם"}"#).unwrap();
        assert!(patch.validate().is_ok());
        patch.apply(&mut item);

        assert_eq!(item.status, "הושלם");
        assert_eq!(item.site, "אתר");
        assert_eq!(item.contact_name, "יוסי");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let patch: Result<UpdateDashboardItem, _> =
            serde_json::from_str(r#"{"status":"הושלם","bogus":1}"#);
        assert!(patch.is_ok());
    }
}
