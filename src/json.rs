//! JSON encoding seam.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialization capabilities used by the process orchestrator.
pub trait JsonHandler: Send + Sync {
    fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, serde_json::Error>;

    fn unmarshal<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, serde_json::Error>;
}

/// Pass-through to `serde_json`. Output is compact.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJson;

impl JsonHandler for SerdeJson {
    fn marshal<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(value)
    }

    fn unmarshal<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, serde_json::Error> {
        serde_json::from_slice(data)
    }
}
