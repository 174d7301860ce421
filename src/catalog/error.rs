use thiserror::Error;

/// Failures talking to the catalog API.
///
/// Transport errors, non-success statuses and undecodable bodies all end
/// up here; `source` carries the underlying reqwest error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch catalog list from '{url}': {source}")]
    ListFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch details of item {id} from '{url}': {source}")]
    DetailFetch {
        id: u64,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    /// Short classification used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            CatalogError::ListFetch { .. } => "list_fetch",
            CatalogError::DetailFetch { .. } => "detail_fetch",
        }
    }

    /// The URL that was requested.
    pub fn url(&self) -> &str {
        match self {
            CatalogError::ListFetch { url, .. } | CatalogError::DetailFetch { url, .. } => url,
        }
    }
}
