use async_trait::async_trait;
use kube::api::{Api, ApiResource, DynamicObject, PostParams};
use kube::core::GroupVersionKind;
use kube::Client;
use tracing::debug;

use crate::core::reporter::resource_target::ResourceTarget;
use crate::errors::Result;

/// Read/replace access to custom resources addressed by `ResourceTarget`.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Current object, including its resource version.
    async fn fetch(&self, target: &ResourceTarget) -> Result<DynamicObject>;

    /// Replace the status subresource. Rejected by the backend when the
    /// object's resource version no longer matches.
    async fn replace_status(
        &self,
        target: &ResourceTarget,
        status: &DynamicObject,
    ) -> Result<DynamicObject>;
}

/// `StatusStore` backed by the Kubernetes API, schema-less via `DynamicObject`.
#[derive(Clone)]
pub struct KubeStatusStore {
    client: Client,
}

impl KubeStatusStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, target: &ResourceTarget) -> Api<DynamicObject> {
        let gvk = GroupVersionKind::gvk(&target.group, &target.version, &target.kind);
        let ar = ApiResource::from_gvk_with_plural(&gvk, &target.kind);
        Api::namespaced_with(self.client.clone(), &target.namespace, &ar)
    }
}

#[async_trait]
impl StatusStore for KubeStatusStore {
    async fn fetch(&self, target: &ResourceTarget) -> Result<DynamicObject> {
        let obj = self.api(target).get(&target.id).await?;

        debug!(
            "Fetched {}/{} at resource version {}",
            target.namespace,
            target.id,
            obj.metadata.resource_version.as_deref().unwrap_or("<none>")
        );
        Ok(obj)
    }

    async fn replace_status(
        &self,
        target: &ResourceTarget,
        status: &DynamicObject,
    ) -> Result<DynamicObject> {
        let body = serde_json::to_vec(status)?;
        let updated = self
            .api(target)
            .replace_status(&target.id, &PostParams::default(), body)
            .await?;

        debug!("Replaced status of {}/{}", target.namespace, target.id);
        Ok(updated)
    }
}
