use reqwest::Client;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{Detail, ListResponse, Summary};
use crate::config::CatalogConfig;

/// HTTP client for the two catalog endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    list_limit: u32,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .user_agent(concat!("dexview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            list_limit: config.list_limit,
        })
    }

    pub fn list_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.list_limit)
    }

    pub fn detail_url(&self, id: u64) -> String {
        format!("{}/pokemon/{}/", self.base_url, id)
    }

    /// `GET <base>/pokemon?limit=N`
    pub async fn fetch_list(&self) -> Result<Vec<Summary>, CatalogError> {
        let url = self.list_url();
        tracing::debug!(url = %url, "Requesting catalog list");

        let response: ListResponse = self
            .get_json(&url)
            .await
            .map_err(|source| CatalogError::ListFetch {
                url: url.clone(),
                source,
            })?;

        Ok(response.results)
    }

    /// `GET <base>/pokemon/{id}/`
    pub async fn fetch_detail(&self, id: u64) -> Result<Detail, CatalogError> {
        let url = self.detail_url(id);
        tracing::debug!(id, url = %url, "Requesting item details");

        self.get_json(&url)
            .await
            .map_err(|source| CatalogError::DetailFetch {
                id,
                url: url.clone(),
                source,
            })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
