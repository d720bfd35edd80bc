use serde::{Serialize, Serializer};

use super::error::ProviderError;

/// Sentinel the document store resolves against its own clock when the document is
/// written. Serializes to a marker string; client-side clocks are never used for
/// record timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerTimestamp;

/// Marker emitted for [`ServerTimestamp`] fields.
pub const SERVER_TIMESTAMP_MARKER: &str = "__server_timestamp__";

impl Serialize for ServerTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(SERVER_TIMESTAMP_MARKER)
    }
}

/// External document store consumed by the session layer.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates or replaces the document `id` in `collection` with the given fields.
    async fn write_document(
        &self,
        collection: &str,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<(), ProviderError>;
}
