use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{ProviderError, Result};

/// Identity of one namespaced custom resource.
///
/// `kind` is the REST resource name the object is served under (for example
/// `targets`), not the CamelCase kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ResourceTarget {
    /// API group; empty for the core group.
    pub group: String,

    #[validate(length(min = 1, message = "version must not be empty"))]
    pub version: String,

    #[validate(length(min = 1, message = "kind must not be empty"))]
    pub kind: String,

    #[validate(length(min = 1, message = "namespace must not be empty"))]
    pub namespace: String,

    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
}

impl ResourceTarget {
    pub fn new(
        id: impl Into<String>,
        namespace: impl Into<String>,
        group: impl Into<String>,
        kind: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// `group/version`, or just `version` for the core group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    pub fn ensure_valid(&self) -> Result<()> {
        self.validate()
            .map_err(|e| ProviderError::BadRequest(format!("invalid report target: {}", e)))
    }
}

impl std::fmt::Display for ResourceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} {}/{}",
            self.api_version(),
            self.kind,
            self.namespace,
            self.id
        )
    }
}
