use crate::error::{ForkscoutError, Result};
use crate::github::types::{Commit, CommitRecord, Fork};
use crate::repo_ref::RepoRef;
use log::{debug, warn};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "forkscout/0.1";

const FORKS_PER_PAGE: u32 = 100;
const COMMITS_PER_PAGE: u32 = 30;
// 3 pages x 30 commits bounds the per-fork history cost.
const MAX_COMMIT_PAGES: u32 = 3;

#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_api_base(token, API_BASE)
    }

    /// Point the client at a different API root (mock servers in tests).
    pub fn with_api_base(token: Option<&str>, api_base: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = token {
            let mut value = header::HeaderValue::from_str(&format!("token {token}"))
                .map_err(|e| ForkscoutError::Api(format!("invalid token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Materialize a paginated list resource: requests page 1, 2, 3, …
    /// until a short or empty page, a non-success response, or the page
    /// ceiling. A non-success status (including a transport error) ends
    /// pagination softly: whatever was fetched so far is returned. A
    /// body that fails to decode on a success status is fatal.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        per_page: u32,
        max_pages: Option<u32>,
    ) -> Result<Vec<T>> {
        let mut records = Vec::new();
        let mut page = 1u32;

        loop {
            let sep = if path.contains('?') { '&' } else { '?' };
            let url = format!(
                "{}{path}{sep}page={page}&per_page={per_page}",
                self.api_base
            );
            debug!("GET {url}");

            let response = match self.http.get(&url).send().await {
                Ok(r) => r,
                Err(e) => {
                    warn!("request for {path} page {page} failed: {e}");
                    break;
                }
            };
            if !response.status().is_success() {
                warn!(
                    "request for {path} page {page} returned {}; stopping pagination",
                    response.status()
                );
                break;
            }

            let batch: Vec<T> = response
                .json()
                .await
                .map_err(|e| ForkscoutError::Decode(format!("{path} page {page}: {e}")))?;

            let len = batch.len() as u32;
            records.extend(batch);

            if len < per_page {
                break;
            }
            if let Some(max) = max_pages {
                if page >= max {
                    break;
                }
            }
            page += 1;
        }

        Ok(records)
    }

    pub async fn fetch_forks(&self, repo: &RepoRef) -> Result<Vec<Fork>> {
        let path = format!("/repos/{}/{}/forks", repo.owner, repo.name);
        self.fetch_all(&path, FORKS_PER_PAGE, None).await
    }

    pub async fn fetch_commits(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
        since: Option<&str>,
    ) -> Result<Vec<Commit>> {
        let mut path = format!("/repos/{owner}/{name}/commits?sha={branch}");
        if let Some(since) = since {
            path.push_str(&format!("&since={since}"));
        }
        let records: Vec<CommitRecord> = self
            .fetch_all(&path, COMMITS_PER_PAGE, Some(MAX_COMMIT_PAGES))
            .await?;
        Ok(records.into_iter().map(Commit::from).collect())
    }
}
