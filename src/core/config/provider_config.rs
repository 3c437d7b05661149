use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{ProviderError, Result};

/// Typed provider configuration.
///
/// Every config can be decoded from an already-resolved property map or from
/// an untyped JSON value handed over by an outer configuration layer.
pub trait ProviderConfig: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Short human label used in error messages.
    const PROVIDER_LABEL: &'static str;

    fn from_map(properties: &HashMap<String, String>) -> Result<Self>;

    fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| {
            ProviderError::bad_config(format!(
                "provided config is not a valid {} config: {}",
                Self::PROVIDER_LABEL,
                e
            ))
        })
    }

    fn name(&self) -> &str;
}
