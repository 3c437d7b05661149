use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::config::{read_string, ProviderConfig};
use crate::errors::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStateProviderConfig {
    #[serde(default)]
    pub name: String,
}

impl ProviderConfig for MemoryStateProviderConfig {
    const PROVIDER_LABEL: &'static str = "memory state provider";

    fn from_map(properties: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            name: read_string(properties, "name").unwrap_or_default(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
