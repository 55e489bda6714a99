pub mod api;
pub mod coerce;
pub mod error;
pub mod list_filter;
pub mod serde_helpers;
