//! Frontend Models
//!
//! Data structures matching the backend API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content record as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response envelope used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of the most recent health probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

impl ServerStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking...",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Checking => "status-checking",
            Self::Connected => "status-connected",
            Self::Disconnected => "status-disconnected",
        }
    }
}

/// Snapshot of the create form taken at submit time.
///
/// The picked file itself stays in the input element; only its name is
/// tracked here so presence can be validated before anything is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub image_name: Option<String>,
}

impl FormDraft {
    /// Title, description and image must all be present before a
    /// create request goes out.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() || self.description.is_empty() || self.image_name.is_none() {
            return Err("Title, description and image are all required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str, image_name: Option<&str>) -> FormDraft {
        FormDraft {
            title: title.to_string(),
            description: description.to_string(),
            image_name: image_name.map(str::to_string),
        }
    }

    #[test]
    fn complete_draft_passes_validation() {
        assert!(draft("B", "d", Some("b.png")).validate().is_ok());
    }

    #[test]
    fn draft_missing_any_field_fails_validation() {
        for incomplete in [
            draft("", "d", Some("b.png")),
            draft("B", "", Some("b.png")),
            draft("B", "d", None),
        ] {
            let err = incomplete.validate().unwrap_err();
            assert!(!err.is_empty());
        }
    }

    #[test]
    fn content_item_parses_backend_json() {
        let json = r#"{
            "id": 2,
            "title": "B",
            "description": "d",
            "imageUrl": "/uploads/b.png",
            "createdAt": "2024-11-05T12:30:00Z"
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 2);
        assert_eq!(item.title, "B");
        assert_eq!(item.image_url.as_deref(), Some("/uploads/b.png"));
        assert!(item.created_at.is_some());
    }

    #[test]
    fn content_item_tolerates_missing_optional_fields() {
        let json = r#"{"id": 1, "title": "A", "description": "d"}"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert!(item.image_url.is_none());
        assert!(item.created_at.is_none());
    }

    #[test]
    fn envelope_without_data_or_message_still_parses() {
        let json = r#"{"success": true}"#;
        let resp: ApiResponse<Vec<ContentItem>> = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert!(resp.data.is_none());
        assert!(resp.message.is_none());
    }

    #[test]
    fn envelope_carries_server_message_on_failure() {
        let json = r#"{"success": false, "message": "image is required"}"#;
        let resp: ApiResponse<ContentItem> = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("image is required"));
    }
}
