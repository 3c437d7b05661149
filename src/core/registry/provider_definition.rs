use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Backend a definition instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "providers.state.memory")]
    MemoryState,
    #[serde(rename = "providers.reporter.k8s")]
    K8sReporter,
}

/// Declarative provider entry, as found in a manager's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDefinition {
    /// Logical name the registry addresses the provider by.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ProviderKind,

    /// Raw properties handed to `init_with_map`.
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl ProviderDefinition {
    pub fn new(name: impl Into<String>, kind: ProviderKind) -> Self {
        Self {
            name: name.into(),
            kind,
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Properties with `name` defaulted to the definition name.
    pub fn effective_properties(&self) -> HashMap<String, String> {
        let mut props = self.properties.clone();
        props
            .entry("name".to_string())
            .or_insert_with(|| self.name.clone());
        props
    }
}
