//! HTTP client for the content repository's REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use summit_core::model::{Document, RepositoryInfo, SearchPage};

use crate::config::Config;
use crate::endpoint;
use crate::error::{CmsError, CmsResult};

/// Page size used when listing every document (the API maximum).
const LIST_PAGE_SIZE: u32 = 100;

const USER_AGENT: &str = concat!("summit/", env!("CARGO_PKG_VERSION"));

/// Read-only access to published documents.
///
/// The diagnostics are written against this trait so they can run
/// against an in-memory repository in tests.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the one published document of a singleton type.
    ///
    /// Returns [`CmsError::NotFound`] when no such document is published.
    async fn get_single(&self, document_type: &str) -> CmsResult<Document>;

    /// Fetch every published document, following pagination to the end.
    async fn get_all(&self) -> CmsResult<Vec<Document>>;
}

/// Content repository API client.
///
/// The master ref is resolved on first use and reused for the lifetime
/// of the client.
#[derive(Debug)]
pub struct PrismicClient {
    http: Client,
    repository: String,
    endpoint: String,
    access_token: Option<String>,
    master_ref: OnceCell<String>,
}

impl PrismicClient {
    /// Create a client for `repository`.
    ///
    /// `endpoint` overrides the API root derived from the repository name.
    ///
    /// # Errors
    /// Returns an error if the repository name is invalid or the HTTP
    /// client cannot be created.
    pub fn new(
        repository: &str,
        endpoint: Option<String>,
        access_token: Option<String>,
    ) -> CmsResult<Self> {
        endpoint::validate_repository_name(repository)?;
        let endpoint = match endpoint {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => endpoint::repository_endpoint(repository)?,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            repository: repository.to_string(),
            endpoint,
            access_token,
            master_ref: OnceCell::new(),
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> CmsResult<Self> {
        Self::new(
            &config.repository_name,
            config.api_endpoint.clone(),
            config.access_token.clone(),
        )
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the repository's refs from the API root.
    pub async fn repository_info(&self) -> CmsResult<RepositoryInfo> {
        let mut params = Vec::new();
        if let Some(token) = &self.access_token {
            params.push(("access_token", token.clone()));
        }
        self.fetch(&self.endpoint, &params).await
    }

    /// The ref of currently published content.
    pub async fn master_ref(&self) -> CmsResult<&str> {
        let reference = self
            .master_ref
            .get_or_try_init(|| async {
                let info = self.repository_info().await?;
                info.master_ref()
                    .map(|r| r.reference.clone())
                    .ok_or_else(|| CmsError::NoMasterRef {
                        repository: self.repository.clone(),
                    })
            })
            .await?;
        Ok(reference.as_str())
    }

    /// Fetch one page of search results.
    pub async fn search(
        &self,
        document_type: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> CmsResult<SearchPage> {
        let reference = self.master_ref().await?;
        let params = search_params(
            reference,
            document_type,
            page,
            page_size,
            self.access_token.as_deref(),
        );
        let url = format!("{}/documents/search", self.endpoint);
        self.fetch(&url, &params).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> CmsResult<T> {
        log::debug!("GET {} {:?}", url, redact(params));

        let response = self.http.get(url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CmsError::Http {
                status: status.as_u16(),
                url: url.to_string(),
                message: body.trim().to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| CmsError::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl DocumentSource for PrismicClient {
    async fn get_single(&self, document_type: &str) -> CmsResult<Document> {
        let page = self.search(Some(document_type), 1, 1).await?;
        page.results
            .into_iter()
            .next()
            .ok_or_else(|| CmsError::NotFound {
                document_type: document_type.to_string(),
            })
    }

    async fn get_all(&self) -> CmsResult<Vec<Document>> {
        let mut documents = Vec::new();
        let mut page_number = 1;

        loop {
            let page = self.search(None, page_number, LIST_PAGE_SIZE).await?;
            log::debug!(
                "Fetched page {}/{} ({} documents)",
                page.page,
                page.total_pages,
                page.results.len()
            );
            let last = page.is_last();
            documents.extend(page.results);
            if last {
                break;
            }
            page_number += 1;
        }

        Ok(documents)
    }
}

/// Query parameters for the documents search endpoint.
fn search_params(
    reference: &str,
    document_type: Option<&str>,
    page: u32,
    page_size: u32,
    access_token: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("ref", reference.to_string())];
    if let Some(doc_type) = document_type {
        params.push(("q", type_predicate(doc_type)));
    }
    params.push(("page", page.to_string()));
    params.push(("pageSize", page_size.to_string()));
    if let Some(token) = access_token {
        params.push(("access_token", token.to_string()));
    }
    params
}

/// Predicate matching documents of one custom type.
fn type_predicate(document_type: &str) -> String {
    format!("[[at(document.type, \"{document_type}\")]]")
}

fn redact(params: &[(&'static str, String)]) -> Vec<(&'static str, String)> {
    params
        .iter()
        .map(|(k, v)| {
            if *k == "access_token" {
                (*k, "***".to_string())
            } else {
                (*k, v.clone())
            }
        })
        .collect()
}
