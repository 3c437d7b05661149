use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;

/// A stored entity. `body` is opaque to every provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    pub id: String,
    pub body: Value,
}

impl StateEntry {
    pub fn new<S: Into<String>>(id: S, body: Value) -> Self {
        Self { id: id.into(), body }
    }

    /// Build an entry from any serializable payload.
    pub fn from_payload<S, T>(id: S, payload: &T) -> Result<Self>
    where
        S: Into<String>,
        T: Serialize,
    {
        Ok(Self::new(id, serde_json::to_value(payload)?))
    }

    /// Decode the body back into a typed payload.
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    pub value: StateEntry,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: String,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    /// Token returned by the previous page; listing resumes after it.
    pub continuation_token: Option<String>,
    /// Page size. `None` returns everything in one page.
    pub max_count: Option<usize>,
}

impl UpsertRequest {
    pub fn new(value: StateEntry) -> Self {
        Self { value }
    }
}

impl GetRequest {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}

impl DeleteRequest {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into() }
    }
}
