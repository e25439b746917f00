// Catalog record types
// Wire shapes for the two content catalogs served to the mobile app

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default animation type applied when an AR hint is created without one
pub const DEFAULT_ANIMATION_TYPE: &str = "floating";

/// Animated GIF metadata record
///
/// Optional fields mirror the admin append contract: a field omitted on
/// creation stays absent in the stored record and is omitted from the
/// serialized JSON rather than appearing as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GifRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub premium: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// AR hint metadata record (3D model pointer plus presentation hints)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArHintRecord {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub premium: bool,
    pub tags: Vec<String>,
    pub animation_type: String,
    pub created_at: DateTime<Utc>,
}

/// Common accessors shared by both catalogs
///
/// Lets `CatalogState` implement filtering and counting once for both
/// record types.
pub trait CatalogRecord {
    fn category(&self) -> Option<&str>;
    fn premium(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
}

impl CatalogRecord for GifRecord {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn premium(&self) -> bool {
        self.premium
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CatalogRecord for ArHintRecord {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn premium(&self) -> bool {
        self.premium
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_omitted_from_json() {
        let record = GifRecord {
            id: "g1".to_string(),
            name: Some("Test".to_string()),
            category: None,
            url: None,
            thumbnail: None,
            premium: false,
            tags: vec![],
            created_at: DateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""name":"Test""#));
        assert!(!json.contains("category"));
        assert!(!json.contains("url"));
        assert!(!json.contains("thumbnail"));
        // Defaults are always present
        assert!(json.contains(r#""premium":false"#));
        assert!(json.contains(r#""tags":[]"#));
    }

    #[test]
    fn test_created_at_serializes_as_rfc3339() {
        let record = GifRecord {
            id: "g1".to_string(),
            name: None,
            category: None,
            url: None,
            thumbnail: None,
            premium: false,
            tags: vec![],
            created_at: DateTime::UNIX_EPOCH,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("1970-01-01T00:00:00Z"));
    }
}
