use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::core::config::{resolve_env, ProviderConfig};
use crate::core::context::ManagerContext;
use crate::errors::Result;

/// Logical name a registry addresses a provider by.
///
/// Object safe, so capability traits can require it behind `dyn`.
pub trait ProviderIdentity: Send + Sync {
    fn id(&self) -> &str;
}

/// Lifecycle contract shared by every backend.
///
/// A provider is built empty, initialised exactly once, and from then on only
/// used through `&self`. `clone_with` yields an independent instance.
#[async_trait]
pub trait Provider: ProviderIdentity + Sized {
    type Config: ProviderConfig;

    async fn init(&mut self, config: Self::Config) -> Result<()>;

    /// Initialise from raw string properties (`$env:` references allowed).
    async fn init_with_map(&mut self, properties: &HashMap<String, String>) -> Result<()> {
        let resolved = resolve_env(properties);
        let config = Self::Config::from_map(&resolved)?;
        self.init(config).await
    }

    /// Initialise from an untyped JSON config.
    async fn init_with_value(&mut self, value: serde_json::Value) -> Result<()> {
        let config = Self::Config::from_value(value)?;
        self.init(config).await
    }

    fn set_context(&mut self, context: Arc<ManagerContext>);

    /// New instance configured with `config`, or with this instance's own
    /// config when `None`.
    async fn clone_with(&self, config: Option<Self::Config>) -> Result<Self>;
}
