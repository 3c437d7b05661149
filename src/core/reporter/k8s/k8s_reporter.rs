use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use kube::Client;
use tracing::{debug, Instrument, Span};

use crate::core::client::kube_client::{
    build_kube_client, home_dir, resolve_connection_profile, ConnectionProfile,
};
use crate::core::context::ManagerContext;
use crate::core::provider::{Provider, ProviderIdentity};
use crate::core::reporter::k8s::k8s_reporter_config::K8sReporterConfig;
use crate::core::reporter::k8s::k8s_status_merge::{existing_properties, merge_status, status_object};
use crate::core::reporter::k8s::k8s_status_store::{KubeStatusStore, StatusStore};
use crate::core::reporter::reporter_trait::Reporter;
use crate::core::reporter::resource_target::ResourceTarget;
use crate::errors::{ProviderError, Result};

/// Reports properties into `status.properties` of a custom resource.
///
/// Each report is a read-modify-write: the object is fetched, its properties
/// merged with the caller's, and the status written back under the resource
/// version that was read. A concurrent writer makes the write fail; retrying
/// is left to the caller.
#[derive(Default)]
pub struct K8sReporter {
    config: K8sReporterConfig,
    client: Option<Client>,
    store: Option<Arc<dyn StatusStore>>,
    context: Option<Arc<ManagerContext>>,
}

impl fmt::Debug for K8sReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("K8sReporter")
            .field("config", &self.config)
            .field("connected", &self.store.is_some())
            .finish()
    }
}

impl K8sReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter over an already-built store, skipping client construction.
    pub fn with_store(config: K8sReporterConfig, store: Arc<dyn StatusStore>) -> Self {
        Self {
            config,
            client: None,
            store: Some(store),
            context: None,
        }
    }

    pub fn config(&self) -> &K8sReporterConfig {
        &self.config
    }

    /// Typed cluster client, once initialised against a real cluster.
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    fn span(&self) -> Span {
        match &self.context {
            Some(ctx) => ctx.span().clone(),
            None => Span::current(),
        }
    }

    async fn report_with(
        store: &dyn StatusStore,
        target: &ResourceTarget,
        properties: HashMap<String, String>,
        overwrite: bool,
    ) -> Result<()> {
        let current = store.fetch(target).await?;

        let existing = if overwrite {
            Default::default()
        } else {
            existing_properties(&current)
        };
        let merged = merge_status(&existing, &properties, overwrite);
        let count = merged.len();

        let status = status_object(target, merged, current.metadata.resource_version.clone());
        store.replace_status(target, &status).await?;

        debug!("Reported {} propert(ies) to {}", count, target);
        Ok(())
    }
}

impl ProviderIdentity for K8sReporter {
    fn id(&self) -> &str {
        &self.config.name
    }
}

#[async_trait]
impl Provider for K8sReporter {
    type Config = K8sReporterConfig;

    async fn init(&mut self, mut config: K8sReporterConfig) -> Result<()> {
        let profile =
            resolve_connection_profile(config.in_cluster, &config.config_path, home_dir())?;
        if let ConnectionProfile::Kubeconfig(path) = &profile {
            config.config_path = path.display().to_string();
        }

        let client = build_kube_client(&profile).await?;
        debug!("K8s reporter '{}' connected ({:?})", config.name, profile);

        self.store = Some(Arc::new(KubeStatusStore::new(client.clone())));
        self.client = Some(client);
        self.config = config;
        Ok(())
    }

    fn set_context(&mut self, context: Arc<ManagerContext>) {
        self.context = Some(context);
    }

    async fn clone_with(&self, config: Option<K8sReporterConfig>) -> Result<Self> {
        let mut ret = K8sReporter::new();
        ret.init(config.unwrap_or_else(|| self.config.clone())).await?;
        ret.context = self.context.clone();
        Ok(ret)
    }
}

#[async_trait]
impl Reporter for K8sReporter {
    async fn report(
        &self,
        target: &ResourceTarget,
        properties: HashMap<String, String>,
        overwrite: bool,
    ) -> Result<()> {
        target.ensure_valid()?;
        let store = self
            .store
            .as_deref()
            .ok_or_else(|| ProviderError::bad_config("K8s reporter is not initialized"))?;

        Self::report_with(store, target, properties, overwrite)
            .instrument(self.span())
            .await
    }
}
