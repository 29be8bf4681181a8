//! Landing page setup guide.
//!
//! Publishing a new custom type cannot be done through the read-only
//! content API, so this prints the manual steps for the Slice Machine UI
//! and the repository dashboard, followed by what is published right now.

use std::io::{self, Write};

use crate::check::{lookup, summarize_navigation, Lookup, NavigationSummary, RULE_WIDTH};
use crate::client::DocumentSource;

/// Current state of the repository as far as the landing setup cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub slice_machine_url: String,
    pub dashboard_url: String,
    pub navigation: Lookup<NavigationSummary>,
    pub landing_exists: bool,
}

/// Look up the navigation and landing singletons, in that order.
pub async fn run_setup(
    source: &dyn DocumentSource,
    slice_machine_url: &str,
    dashboard_url: &str,
) -> SetupReport {
    let navigation = lookup(source, "navigation", summarize_navigation).await;
    let landing = lookup(source, "landing", |_| ()).await;

    SetupReport {
        slice_machine_url: slice_machine_url.to_string(),
        dashboard_url: dashboard_url.to_string(),
        navigation,
        landing_exists: landing.is_found(),
    }
}

impl SetupReport {
    /// Write the instructions followed by the current state.
    pub fn render<O: Write>(&self, out: &mut O) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(out, "🚀 Setting up Landing page in Prismic...")?;
        writeln!(out, "{rule}")?;

        writeln!(out, "\n📝 MANUAL SETUP REQUIRED:\n")?;
        writeln!(
            out,
            "The Landing custom type needs to be pushed via Slice Machine UI."
        )?;
        writeln!(out, "\n✨ Steps to complete setup:\n")?;
        writeln!(out, "1. Open Slice Machine UI: {}", self.slice_machine_url)?;
        writeln!(out, "   → You should see \"Landing\" in the Custom Types list")?;
        writeln!(out, "   → Click the green \"Push to Prismic\" button")?;
        writeln!(out, "   → Confirm the push\n")?;
        writeln!(out, "2. Create Landing document in Prismic:")?;
        writeln!(out, "   → Visit: {}", self.dashboard_url)?;
        writeln!(out, "   → Click \"Create\" → \"Landing\"")?;
        writeln!(out, "   → Add the LandingHero slice")?;
        writeln!(out, "   → Fill in content and publish\n")?;
        writeln!(out, "3. Add Landing to Navigation:")?;
        writeln!(out, "   → Open the \"Navigation\" document")?;
        writeln!(out, "   → Click \"Add item\" in Links")?;
        writeln!(out, "   → Label: \"Landing\"")?;
        writeln!(out, "   → Link: Select \"Landing\" document")?;
        writeln!(out, "   → Save and publish\n")?;
        writeln!(out, "{rule}")?;

        writeln!(out, "\n🔍 Current Prismic setup:\n")?;

        match &self.navigation {
            Lookup::Found(nav) => {
                writeln!(out, "✅ Navigation has {} links:", nav.links.len())?;
                for (i, link) in nav.links.iter().enumerate() {
                    writeln!(out, "   {}. {}", i + 1, link.label)?;
                }
            }
            Lookup::Missing => writeln!(out, "❌ Could not fetch navigation")?,
        }

        if self.landing_exists {
            writeln!(out, "\n✅ Landing document already exists!")?;
        } else {
            writeln!(out, "\n⚠️  Landing document does not exist yet")?;
            writeln!(
                out,
                "   You need to create it in Prismic CMS after pushing the custom type"
            )?;
        }

        writeln!(
            out,
            "\n💡 Once you complete these steps, restart your dev server:"
        )?;
        writeln!(out, "   npm run dev\n")?;

        Ok(())
    }
}
