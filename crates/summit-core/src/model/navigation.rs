//! Typed view over the `navigation` singleton's data payload.

use serde::{Deserialize, Serialize};

use crate::model::lenient;

const NO_LABEL: &str = "No label";
const UNKNOWN: &str = "unknown";

/// The `data` payload of a `navigation` document.
///
/// Links that do not have the expected shape still count, with every
/// field defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationData {
    #[serde(default, deserialize_with = "lenient::list")]
    pub links: Vec<NavigationLink>,
}

/// One entry in the navigation's `links` group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationLink {
    /// Rich-text label; usually a single paragraph.
    #[serde(default, deserialize_with = "lenient::list")]
    pub label: Vec<RichTextNode>,

    #[serde(default, deserialize_with = "lenient::value")]
    pub link: Option<LinkField>,
}

/// A block of structured rich text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "type", default)]
    pub node_type: String,

    #[serde(default)]
    pub text: Option<String>,
}

/// A link field. Document links carry the target's `type`, web links a `url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkField {
    /// "Document", "Web", "Media" or "Any" for an empty link.
    #[serde(default)]
    pub link_type: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub target_type: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl NavigationLink {
    /// Text of the label's first node.
    pub fn label_text(&self) -> &str {
        self.label
            .first()
            .and_then(|node| node.text.as_deref())
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_LABEL)
    }

    pub fn link_kind(&self) -> &str {
        self.link
            .as_ref()
            .and_then(|link| link.link_type.as_deref())
            .filter(|kind| !kind.is_empty())
            .unwrap_or(UNKNOWN)
    }

    /// Linked document type for document links, URL for web links.
    pub fn link_target(&self) -> &str {
        self.link
            .as_ref()
            .and_then(|link| {
                link.target_type
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .or_else(|| link.url.as_deref().filter(|u| !u.is_empty()))
            })
            .unwrap_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_deserialize() {
        let json = r#"{
            "links": [
                {
                    "label": [{"type": "paragraph", "text": "Landing", "spans": []}],
                    "link": {"link_type": "Document", "id": "ZxY1", "type": "landing", "lang": "en-us"}
                },
                {
                    "label": [{"type": "paragraph", "text": "Shop", "spans": []}],
                    "link": {"link_type": "Web", "url": "https://shop.example.com"}
                }
            ]
        }"#;
        let nav: NavigationData = serde_json::from_str(json).unwrap();
        assert_eq!(nav.links.len(), 2);

        assert_eq!(nav.links[0].label_text(), "Landing");
        assert_eq!(nav.links[0].link_kind(), "Document");
        assert_eq!(nav.links[0].link_target(), "landing");

        assert_eq!(nav.links[1].link_kind(), "Web");
        assert_eq!(nav.links[1].link_target(), "https://shop.example.com");
    }

    #[test]
    fn test_navigation_missing_links() {
        let nav: NavigationData = serde_json::from_str("{}").unwrap();
        assert!(nav.links.is_empty());

        let nav: NavigationData = serde_json::from_str(r#"{"links": null}"#).unwrap();
        assert!(nav.links.is_empty());
    }

    #[test]
    fn test_link_fallbacks() {
        let link = NavigationLink::default();
        assert_eq!(link.label_text(), "No label");
        assert_eq!(link.link_kind(), "unknown");
        assert_eq!(link.link_target(), "unknown");
    }

    #[test]
    fn test_string_label_is_no_label() {
        let json = r#"{"links": [{"label": "Home", "link": {"link_type": "Web", "url": "/"}}]}"#;
        let nav: NavigationData = serde_json::from_str(json).unwrap();
        assert_eq!(nav.links.len(), 1);
        assert_eq!(nav.links[0].label_text(), "No label");
        assert_eq!(nav.links[0].link_target(), "/");
    }

    #[test]
    fn test_malformed_entries_still_count() {
        let json = r#"{
            "links": [
                "not-a-link",
                {"label": [{"type": "paragraph", "text": 42}], "link": "landing"},
                {"label": [{"type": "paragraph", "text": "Shop"}], "link": {"link_type": 7}}
            ]
        }"#;
        let nav: NavigationData = serde_json::from_str(json).unwrap();
        assert_eq!(nav.links.len(), 3);
        assert_eq!(nav.links[0], NavigationLink::default());
        assert_eq!(nav.links[1].label_text(), "No label");
        assert_eq!(nav.links[1].link_kind(), "unknown");
        assert_eq!(nav.links[2].label_text(), "Shop");
        assert_eq!(nav.links[2].link_target(), "unknown");
    }

    #[test]
    fn test_links_not_a_list() {
        let nav: NavigationData = serde_json::from_str(r#"{"links": "oops"}"#).unwrap();
        assert!(nav.links.is_empty());
    }

    #[test]
    fn test_empty_link_field() {
        let json = r#"{"label": [], "link": {"link_type": "Any"}}"#;
        let link: NavigationLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.label_text(), "No label");
        assert_eq!(link.link_kind(), "Any");
        assert_eq!(link.link_target(), "unknown");
    }
}
