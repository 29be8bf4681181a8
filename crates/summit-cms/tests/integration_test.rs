//! Integration tests for the check and setup diagnostics.
//!
//! These run the diagnostics against an in-memory repository so they
//! need no network access.

use async_trait::async_trait;
use serde_json::json;
use summit_cms::check::Lookup;
use summit_cms::{run_check, run_setup, CmsError, CmsResult, DocumentSource};
use summit_core::Document;

const DASHBOARD: &str = "https://p2backpack.prismic.io";

/// Published documents held in memory; `listing_error` makes `get_all` fail.
#[derive(Debug)]
struct MemorySource {
    documents: Vec<Document>,
    listing_error: Option<String>,
}

impl MemorySource {
    fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            listing_error: None,
        }
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn get_single(&self, document_type: &str) -> CmsResult<Document> {
        self.documents
            .iter()
            .find(|d| d.doc_type == document_type)
            .cloned()
            .ok_or_else(|| CmsError::NotFound {
                document_type: document_type.to_string(),
            })
    }

    async fn get_all(&self) -> CmsResult<Vec<Document>> {
        match &self.listing_error {
            Some(message) => Err(CmsError::Parse {
                url: "memory://documents".to_string(),
                message: message.clone(),
            }),
            None => Ok(self.documents.clone()),
        }
    }
}

fn navigation(labels: &[&str]) -> Document {
    let links: Vec<_> = labels
        .iter()
        .map(|label| {
            json!({
                "label": [{"type": "paragraph", "text": label, "spans": []}],
                "link": {"link_type": "Document", "type": label.to_lowercase()}
            })
        })
        .collect();
    Document::new("nav-1", "navigation").with_data(json!({ "links": links }))
}

fn page(id: &str, doc_type: &str, slices: usize) -> Document {
    let slices: Vec<_> = (0..slices)
        .map(|i| json!({"slice_type": format!("block_{i}"), "primary": {}, "items": []}))
        .collect();
    Document::new(id, doc_type).with_data(json!({ "slices": slices }))
}

fn render_check(source: &MemorySource) -> (String, String) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let report = rt.block_on(run_check(source, "p2backpack", DASHBOARD));
    let mut out = Vec::new();
    let mut err = Vec::new();
    report.render(&mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

/// Test a fully populated repository reports every document
#[tokio::test]
async fn test_check_complete_repository() {
    let source = MemorySource::new(vec![
        navigation(&["Landing", "About"]),
        page("land-1", "landing", 2),
        page("about-1", "about", 1),
        page("post-1", "post", 0),
        page("post-2", "post", 0),
    ]);

    let report = run_check(&source, "p2backpack", DASHBOARD).await;

    assert!(report.navigation.is_found());
    assert!(report.landing.is_found());
    assert!(report.about.is_found());

    let tally = report.inventory.as_ref().unwrap();
    assert_eq!(tally.total(), source.documents.len());
    assert_eq!(tally.count("post"), 2);
}

/// Test a missing document prints exactly one not-found line and the check continues
#[test]
fn test_check_missing_about_continues() {
    let source = MemorySource::new(vec![
        navigation(&["Landing"]),
        page("land-1", "landing", 1),
    ]);

    let (out, err) = render_check(&source);

    assert!(err.is_empty());
    assert_eq!(out.matches("not found").count(), 1);
    assert!(out.contains("❌ About document not found\n"));
    assert!(out.contains("   ID: land-1\n   Type: landing\n   Slices: 1\n"));
    assert!(out.contains("   navigation: 1 document(s)\n   landing: 1 document(s)\n"));
    assert!(out.contains("💡 Next steps:"));
}

/// Test the navigation links are listed with their targets
#[test]
fn test_check_lists_navigation_links() {
    let source = MemorySource::new(vec![navigation(&["Landing", "About"])]);

    let (out, _) = render_check(&source);

    assert!(out.contains("   Links in navigation: 2\n"));
    assert!(out.contains("   1. \"Landing\" → Document (landing)\n"));
    assert!(out.contains("   2. \"About\" → Document (about)\n"));
}

/// Test an empty repository still completes
#[test]
fn test_check_empty_repository() {
    let source = MemorySource::new(Vec::new());

    let (out, err) = render_check(&source);

    assert!(err.is_empty());
    assert_eq!(out.matches("not found").count(), 3);
    assert!(out.contains("📚 All Documents in Repository:\n\n"));
}

/// Test a failed listing is reported on stderr and the footer still prints
#[test]
fn test_check_listing_failure() {
    let mut source = MemorySource::new(vec![page("land-1", "landing", 0)]);
    source.listing_error = Some("unexpected end of input".to_string());

    let (out, err) = render_check(&source);

    assert!(err.starts_with("❌ Error: parse error from memory://documents"));
    assert!(out.contains("✅ Landing document exists\n"));
    assert!(out.contains("   3. Visit: https://p2backpack.prismic.io\n"));
}

/// Test a navigation whose links are not a list is still reported as existing
#[tokio::test]
async fn test_check_malformed_navigation() {
    let broken = Document::new("nav-1", "navigation").with_data(json!({"links": "oops"}));
    let source = MemorySource::new(vec![broken]);

    let report = run_check(&source, "p2backpack", DASHBOARD).await;

    match &report.navigation {
        Lookup::Found(nav) => assert!(nav.links.is_empty()),
        Lookup::Missing => panic!("navigation exists but was reported missing"),
    }
    assert_eq!(report.inventory.unwrap().total(), 1);
}

/// Test a navigation link with a plain-string label prints as unlabeled
#[test]
fn test_check_string_label() {
    let nav = Document::new("nav-1", "navigation").with_data(json!({
        "links": [{"label": "Home", "link": {"link_type": "Document", "type": "landing"}}]
    }));
    let source = MemorySource::new(vec![nav]);

    let (out, _) = render_check(&source);

    assert!(out.contains("✅ Navigation document exists\n   Links in navigation: 1\n"));
    assert!(out.contains("   1. \"No label\" → Document (landing)\n"));
    assert!(!out.contains("Navigation document not found"));
}

/// Test slices with null items or no slice type still count toward an existing landing
#[test]
fn test_check_landing_with_irregular_slices() {
    let landing = Document::new("land-1", "landing").with_data(json!({
        "slices": [
            {"slice_type": "landing_hero", "primary": {}, "items": null},
            {"primary": {}, "items": []}
        ]
    }));
    let source = MemorySource::new(vec![landing]);

    let (out, _) = render_check(&source);

    assert!(out.contains("✅ Landing document exists\n   ID: land-1\n   Type: landing\n   Slices: 2\n"));
    assert!(!out.contains("Landing document not found"));
}

/// Test check and setup agree about an existing landing document
#[tokio::test]
async fn test_check_and_setup_agree_on_landing() {
    let landing = Document::new("land-1", "landing")
        .with_data(json!({"slices": [{"slice_type": "landing_hero", "items": null}]}));
    let source = MemorySource::new(vec![landing]);

    let check = run_check(&source, "p2backpack", DASHBOARD).await;
    let setup = run_setup(&source, "http://localhost:9999", DASHBOARD).await;

    assert!(check.landing.is_found());
    assert!(setup.landing_exists);
}

/// Test setup reports the navigation labels and an existing landing page
#[tokio::test]
async fn test_setup_existing_landing() {
    let source = MemorySource::new(vec![
        navigation(&["About"]),
        page("land-1", "landing", 0),
    ]);

    let report = run_setup(&source, "http://localhost:9999", DASHBOARD).await;
    assert!(report.landing_exists);

    let mut out = Vec::new();
    report.render(&mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("✅ Navigation has 1 links:\n   1. About\n"));
    assert!(out.contains("✅ Landing document already exists!"));
}

/// Test setup against an empty repository
#[tokio::test]
async fn test_setup_empty_repository() {
    let source = MemorySource::new(Vec::new());

    let report = run_setup(&source, "http://localhost:9999", DASHBOARD).await;

    assert_eq!(report.navigation, Lookup::Missing);
    assert!(!report.landing_exists);
}
