//! Repository health check.
//!
//! Looks up the `navigation`, `landing` and `about` singletons one after
//! another, tallies every published document by type, and renders the
//! findings for the operator. A failed lookup only affects its own
//! section; the check itself always completes.

use std::io::{self, Write};

use serde::de::DeserializeOwned;
use summit_core::model::{Document, NavigationData, SliceZone};
use summit_core::TypeTally;

use crate::client::DocumentSource;

pub(crate) const RULE_WIDTH: usize = 60;

/// Outcome of a single singleton lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// One navigation entry, reduced to what gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSummary {
    pub label: String,
    pub kind: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSummary {
    pub links: Vec<LinkSummary>,
}

/// Identifying fields of a page-like document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub id: String,
    pub doc_type: String,
    pub slices: usize,
}

/// Everything the check found, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub repository: String,
    pub dashboard_url: String,
    pub navigation: Lookup<NavigationSummary>,
    pub landing: Lookup<PageSummary>,
    pub about: Lookup<PageSummary>,
    /// Document counts, or the message of the listing failure.
    pub inventory: Result<TypeTally, String>,
}

/// Run the check against `source`.
///
/// Requests are issued strictly one after another.
pub async fn run_check(
    source: &dyn DocumentSource,
    repository: &str,
    dashboard_url: &str,
) -> CheckReport {
    log::info!("Checking repository {}", repository);

    let navigation = lookup(source, "navigation", summarize_navigation).await;
    let landing = lookup(source, "landing", summarize_page).await;
    let about = lookup(source, "about", summarize_page).await;

    let inventory = match source.get_all().await {
        Ok(documents) => {
            log::debug!("Listed {} documents", documents.len());
            Ok(TypeTally::from_documents(&documents))
        }
        Err(e) => {
            log::warn!("Failed to list documents: {}", e);
            Err(e.to_string())
        }
    };

    CheckReport {
        repository: repository.to_string(),
        dashboard_url: dashboard_url.to_string(),
        navigation,
        landing,
        about,
        inventory,
    }
}

/// Fetch a singleton and reduce it.
///
/// Only a failed fetch becomes [`Lookup::Missing`]; a fetched document is
/// always reported.
pub(crate) async fn lookup<T>(
    source: &dyn DocumentSource,
    document_type: &str,
    summarize: fn(&Document) -> T,
) -> Lookup<T> {
    match source.get_single(document_type).await {
        Ok(doc) => Lookup::Found(summarize(&doc)),
        Err(e) if e.is_not_found() => {
            log::debug!("No {} document published", document_type);
            Lookup::Missing
        }
        Err(e) => {
            log::warn!("Lookup of {} document failed: {}", document_type, e);
            Lookup::Missing
        }
    }
}

/// Decode a document's payload, defaulting every field when the payload
/// is not an object at all.
fn view<T: DeserializeOwned + Default>(doc: &Document) -> T {
    doc.data_as().unwrap_or_else(|e| {
        log::warn!("Unexpected {} payload in {}: {}", doc.doc_type, doc.id, e);
        T::default()
    })
}

pub(crate) fn summarize_navigation(doc: &Document) -> NavigationSummary {
    let data: NavigationData = view(doc);
    let links = data
        .links
        .iter()
        .map(|link| LinkSummary {
            label: link.label_text().to_string(),
            kind: link.link_kind().to_string(),
            target: link.link_target().to_string(),
        })
        .collect();
    NavigationSummary { links }
}

fn summarize_page(doc: &Document) -> PageSummary {
    let zone: SliceZone = view(doc);
    PageSummary {
        id: doc.id.clone(),
        doc_type: doc.doc_type.clone(),
        slices: zone.len(),
    }
}

impl CheckReport {
    /// Write the report. The listing failure goes to `err`, everything
    /// else to `out`.
    pub fn render<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out, "🔍 Checking Prismic repository: {}", self.repository)?;
        writeln!(out, "{rule}")?;

        writeln!(out, "\n📋 Navigation Document:")?;
        match &self.navigation {
            Lookup::Found(nav) => {
                writeln!(out, "✅ Navigation document exists")?;
                writeln!(out, "   Links in navigation: {}", nav.links.len())?;
                if nav.links.is_empty() {
                    writeln!(out, "   ⚠️  No links configured in navigation")?;
                }
                for (i, link) in nav.links.iter().enumerate() {
                    writeln!(
                        out,
                        "   {}. \"{}\" → {} ({})",
                        i + 1,
                        link.label,
                        link.kind,
                        link.target
                    )?;
                }
            }
            Lookup::Missing => writeln!(out, "❌ Navigation document not found")?,
        }

        writeln!(out, "\n🚀 Landing Document:")?;
        match &self.landing {
            Lookup::Found(page) => {
                writeln!(out, "✅ Landing document exists")?;
                writeln!(out, "   ID: {}", page.id)?;
                writeln!(out, "   Type: {}", page.doc_type)?;
                writeln!(out, "   Slices: {}", page.slices)?;
            }
            Lookup::Missing => {
                writeln!(out, "❌ Landing document not found")?;
                writeln!(out, "   You need to create a Landing document in Prismic CMS")?;
            }
        }

        writeln!(out, "\n📄 About Document:")?;
        match &self.about {
            Lookup::Found(page) => {
                writeln!(out, "✅ About document exists")?;
                writeln!(out, "   ID: {}", page.id)?;
                writeln!(out, "   Slices: {}", page.slices)?;
            }
            Lookup::Missing => writeln!(out, "❌ About document not found")?,
        }

        writeln!(out, "\n📚 All Documents in Repository:")?;
        match &self.inventory {
            Ok(tally) => {
                for (doc_type, count) in tally.entries() {
                    writeln!(out, "   {doc_type}: {count} document(s)")?;
                }
            }
            Err(message) => writeln!(err, "❌ Error: {message}")?,
        }

        writeln!(out, "\n{rule}")?;
        writeln!(out, "💡 Next steps:")?;
        writeln!(
            out,
            "   1. If Landing document doesn't exist: Create it in Prismic CMS"
        )?;
        writeln!(
            out,
            "   2. If Navigation has no links: Add Landing to Navigation in Prismic CMS"
        )?;
        writeln!(out, "   3. Visit: {}", self.dashboard_url)?;

        Ok(())
    }
}
