use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the list endpoint.
///
/// `url` points at the detail resource and ends in the item's numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub name: String,
    pub url: String,
}

/// Body of the list endpoint. Paging fields (`count`, `next`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub results: Vec<Summary>,
}

/// Full attributes of a single item. Extra fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub id: u64,
    pub name: String,
    pub height: u64,
    pub weight: u64,
}
