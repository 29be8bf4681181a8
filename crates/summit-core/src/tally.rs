//! Per-type document counts.

use serde::Serialize;

use crate::model::Document;

/// Count of documents per custom type, in the order each type was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeTally {
    entries: Vec<(String, usize)>,
}

impl TypeTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut tally = Self::new();
        for doc in documents {
            tally.record(&doc.doc_type);
        }
        tally
    }

    /// Count one more document of `doc_type`.
    pub fn record(&mut self, doc_type: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| t == doc_type) {
            entry.1 += 1;
        } else {
            self.entries.push((doc_type.to_string(), 1));
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, n)| (t.as_str(), *n))
    }

    pub fn count(&self, doc_type: &str) -> usize {
        self.entries
            .iter()
            .find(|(t, _)| t == doc_type)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Number of documents tallied.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
