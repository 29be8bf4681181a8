//! Repository name to URL mapping.

use crate::error::{CmsError, CmsResult};

/// Check a repository name is a valid subdomain label.
pub fn validate_repository_name(name: &str) -> CmsResult<()> {
    let valid = !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');

    if valid {
        Ok(())
    } else {
        Err(CmsError::InvalidRepositoryName(name.to_string()))
    }
}

/// REST API root for a repository, served from the CDN.
pub fn repository_endpoint(name: &str) -> CmsResult<String> {
    validate_repository_name(name)?;
    Ok(format!("https://{name}.cdn.prismic.io/api/v2"))
}

/// Web UI where editors create and publish documents.
pub fn dashboard_url(name: &str) -> String {
    format!("https://{name}.prismic.io")
}
