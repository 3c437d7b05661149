use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::core::config::{parse_field, read_string, ProviderConfig};
use crate::errors::Result;

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K8sReporterConfig {
    #[serde(default)]
    pub name: String,

    /// Kubeconfig path; empty means `~/.kube/config`.
    #[serde(default)]
    pub config_path: String,

    /// Accepts `true` as well as `"true"` when decoded from JSON.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub in_cluster: bool,
}

impl ProviderConfig for K8sReporterConfig {
    const PROVIDER_LABEL: &'static str = "K8s reporter";

    fn from_map(properties: &HashMap<String, String>) -> Result<Self> {
        Ok(Self {
            name: read_string(properties, "name").unwrap_or_default(),
            config_path: read_string(properties, "configPath").unwrap_or_default(),
            in_cluster: parse_field::<bool>(properties, "inCluster", Self::PROVIDER_LABEL)?
                .unwrap_or(false),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
