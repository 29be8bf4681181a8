use serde::{Deserialize, Serialize};

use crate::model::lenient;

/// The slice zone of a page-like document (`landing`, `about`).
///
/// Every element of `slices` counts as a slice, whatever its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliceZone {
    #[serde(default, deserialize_with = "lenient::list")]
    pub slices: Vec<Slice>,
}

/// A reusable content block inside a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    #[serde(default, deserialize_with = "lenient::value")]
    pub id: Option<String>,

    /// Slice model name (e.g. "landing_hero"); empty when absent.
    #[serde(default, deserialize_with = "lenient::value")]
    pub slice_type: String,

    #[serde(default, deserialize_with = "lenient::value")]
    pub variation: Option<String>,

    #[serde(default)]
    pub primary: serde_json::Value,

    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<serde_json::Value>,
}

impl SliceZone {
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_zone_deserialize() {
        let json = r#"{
            "title": [{"type": "heading1", "text": "Welcome"}],
            "slices": [
                {
                    "id": "landing_hero$1",
                    "slice_type": "landing_hero",
                    "slice_label": null,
                    "variation": "default",
                    "version": "initial",
                    "primary": {"heading": "Pack light"},
                    "items": []
                }
            ]
        }"#;
        let zone: SliceZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.len(), 1);
        assert_eq!(zone.slices[0].slice_type, "landing_hero");
        assert_eq!(zone.slices[0].variation.as_deref(), Some("default"));
    }

    #[test]
    fn test_slice_with_null_items() {
        let json = r#"{"slices": [{"slice_type": "landing_hero", "primary": {}, "items": null}]}"#;
        let zone: SliceZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.len(), 1);
        assert_eq!(zone.slices[0].slice_type, "landing_hero");
        assert!(zone.slices[0].items.is_empty());
    }

    #[test]
    fn test_slice_without_type_still_counts() {
        let json = r#"{"slices": [{"primary": {}}, {"slice_type": null}, "stray", 3]}"#;
        let zone: SliceZone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.len(), 4);
        assert_eq!(zone.slices[0].slice_type, "");
    }

    #[test]
    fn test_slices_not_a_list() {
        let zone: SliceZone = serde_json::from_str(r#"{"slices": {"a": 1}}"#).unwrap();
        assert!(zone.is_empty());
        let zone: SliceZone = serde_json::from_str(r#"{"slices": null}"#).unwrap();
        assert!(zone.is_empty());
    }

    #[test]
    fn test_slice_zone_missing() {
        let zone: SliceZone = serde_json::from_str(r#"{"title": []}"#).unwrap();
        assert!(zone.is_empty());
    }
}
