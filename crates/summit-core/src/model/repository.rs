use serde::{Deserialize, Serialize};

/// Response of the repository API root: the content refs the
/// repository currently exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    #[serde(default)]
    pub refs: Vec<Ref>,
}

/// A content ref (a snapshot of published content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ref {
    pub id: String,

    #[serde(rename = "ref")]
    pub reference: String,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}

impl RepositoryInfo {
    /// The ref pointing at currently published content.
    pub fn master_ref(&self) -> Option<&Ref> {
        self.refs.iter().find(|r| r.is_master_ref)
    }
}
