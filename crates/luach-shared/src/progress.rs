//! Progress groups: named completed/total counters with a stored percentage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::{ValidationError, required_str, required_str_opt};

/// A stored progress group.
///
/// `percentage` is stored as sent by the client rather than derived from
/// `completed`/`total`; the dashboard treats it as display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressGroup {
    pub id: Uuid,
    pub name: String,
    pub completed: i32,
    pub total: i32,
    pub percentage: i32,
}

/// Insert payload. Counters default to zero when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressGroup {
    pub name: String,
    #[serde(default)]
    pub completed: i32,
    #[serde(default)]
    pub total: i32,
    #[serde(default)]
    pub percentage: i32,
}

impl NewProgressGroup {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_str(&self.name, "name")
    }
}

/// Partial update payload. Absent fields leave the record untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProgressGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<i32>,
}

impl UpdateProgressGroup {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required_str_opt(self.name.as_ref(), "name")
    }

    /// Merge the present fields into an existing record.
    pub fn apply(&self, group: &mut ProgressGroup) {
        if let Some(name) = &self.name {
            group.name = name.clone();
        }
        if let Some(completed) = self.completed {
            group.completed = completed;
        }
        if let Some(total) = self.total {
            group.total = total;
        }
        if let Some(percentage) = self.percentage {
            group.percentage = percentage;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_default_to_zero() {
        let group: NewProgressGroup =
            serde_json::from_str(r#"{"name":"קבוצת פנייה א"}"#).unwrap();
        assert_eq!(group.completed, 0);
        assert_eq!(group.total, 0);
        assert_eq!(group.percentage, 0);
        assert!(group.validate().is_ok());
    }

    #[test]
    fn test_name_is_required() {
        let group = NewProgressGroup {
            name: String::new(),
            completed: 1,
            total: 2,
            percentage: 50,
        };
        assert_eq!(group.validate(), Err(ValidationError::EmptyField("name")));
    }

    #[test]
    fn test_update_merges_counters() {
        let mut group = ProgressGroup {
            id: Uuid::nil(),
            name: "בדיקות איכות".to_string(),
            completed: 15,
            total: 20,
            percentage: 75,
        };

        let patch: UpdateProgressGroup =
            serde_json::from_str(r#"{"completed":20,"percentage":100}"#).unwrap();
        patch.apply(&mut group);

        assert_eq!(group.completed, 20);
        assert_eq!(group.total, 20);
        assert_eq!(group.percentage, 100);
        assert_eq!(group.name, "בדיקות איכות");
    }
}
