//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (row activation, paging, closing the
/// modal) or system events (a fetch finished, a tick elapsed).
pub trait Intent: Send + 'static {}
