use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::provider::ProviderIdentity;
use crate::core::reporter::resource_target::ResourceTarget;
use crate::errors::Result;

/// Status reporting capability.
#[async_trait]
pub trait Reporter: ProviderIdentity {
    /// Merge `properties` into the reported status of `target`.
    ///
    /// With `overwrite` the existing properties are discarded first.
    async fn report(
        &self,
        target: &ResourceTarget,
        properties: HashMap<String, String>,
        overwrite: bool,
    ) -> Result<()>;
}
