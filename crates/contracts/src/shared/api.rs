//! Response envelopes used by every REST endpoint.

use serde::{Deserialize, Serialize};

/// `{ message, data }` wrapper around a single payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// `{ message, data: [..] }` wrapper around a collection.
///
/// A missing or `null` `data` field is an empty collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// Acknowledgement of a create, update or delete. The echoed record is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
