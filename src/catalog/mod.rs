//! Client for the remote catalog API.
//!
//! The catalog exposes two read endpoints: a list of item summaries and
//! the full attributes of one item addressed by numeric id.

mod client;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use types::{Detail, ListResponse, Summary};
