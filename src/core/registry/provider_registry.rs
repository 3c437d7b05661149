use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::info;

use crate::core::context::ManagerContext;
use crate::core::provider::Provider;
use crate::core::registry::provider_definition::{ProviderDefinition, ProviderKind};
use crate::core::reporter::k8s::K8sReporter;
use crate::core::reporter::Reporter;
use crate::core::state_store::memory::MemoryStateProvider;
use crate::core::state_store::StateProvider;
use crate::errors::{ProviderError, Result};

/// A provider held by the registry, by capability.
#[derive(Clone)]
pub enum RegisteredProvider {
    State(Arc<dyn StateProvider>),
    Reporter(Arc<dyn Reporter>),
}

/// Initialised providers addressed by logical name.
pub struct ProviderRegistry {
    context: Arc<ManagerContext>,
    providers: HashMap<String, RegisteredProvider>,
}

impl ProviderRegistry {
    pub fn new(context: Arc<ManagerContext>) -> Self {
        Self {
            context,
            providers: HashMap::new(),
        }
    }

    /// Instantiate and initialise every definition.
    ///
    /// Initialisation runs concurrently; the first failure aborts the build.
    pub async fn build(
        definitions: Vec<ProviderDefinition>,
        context: Arc<ManagerContext>,
    ) -> Result<Self> {
        let mut registry = Self::new(context.clone());

        let mut seen = std::collections::HashSet::new();
        for def in &definitions {
            if !seen.insert(def.name.as_str()) {
                return Err(duplicate(&def.name));
            }
        }

        let built = try_join_all(
            definitions
                .iter()
                .map(|def| instantiate(def, context.clone())),
        )
        .await?;

        for (name, provider) in built {
            registry.insert(name, provider)?;
        }

        info!(
            "Provider registry for '{}' ready with {} provider(s)",
            context.name,
            registry.len()
        );
        Ok(registry)
    }

    pub fn context(&self) -> &Arc<ManagerContext> {
        &self.context
    }

    pub fn register_state_provider(
        &mut self,
        name: impl Into<String>,
        provider: Arc<dyn StateProvider>,
    ) -> Result<()> {
        self.insert(name.into(), RegisteredProvider::State(provider))
    }

    pub fn register_reporter(
        &mut self,
        name: impl Into<String>,
        reporter: Arc<dyn Reporter>,
    ) -> Result<()> {
        self.insert(name.into(), RegisteredProvider::Reporter(reporter))
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredProvider> {
        self.providers.get(name)
    }

    /// State provider registered under `name`, if that is what it is.
    pub fn state_provider(&self, name: &str) -> Option<Arc<dyn StateProvider>> {
        match self.providers.get(name)? {
            RegisteredProvider::State(p) => Some(p.clone()),
            RegisteredProvider::Reporter(_) => None,
        }
    }

    pub fn reporter(&self, name: &str) -> Option<Arc<dyn Reporter>> {
        match self.providers.get(name)? {
            RegisteredProvider::Reporter(r) => Some(r.clone()),
            RegisteredProvider::State(_) => None,
        }
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    fn insert(&mut self, name: String, provider: RegisteredProvider) -> Result<()> {
        if self.providers.contains_key(&name) {
            return Err(duplicate(&name));
        }
        self.providers.insert(name, provider);
        Ok(())
    }
}

fn duplicate(name: &str) -> ProviderError {
    ProviderError::bad_config(format!("provider '{}' is defined more than once", name))
}

async fn instantiate(
    def: &ProviderDefinition,
    context: Arc<ManagerContext>,
) -> Result<(String, RegisteredProvider)> {
    let props = def.effective_properties();

    let provider = match def.kind {
        ProviderKind::MemoryState => {
            let mut p = MemoryStateProvider::new();
            p.init_with_map(&props).await?;
            p.set_context(context);
            RegisteredProvider::State(Arc::new(p))
        }
        ProviderKind::K8sReporter => {
            let mut r = K8sReporter::new();
            r.init_with_map(&props).await?;
            r.set_context(context);
            RegisteredProvider::Reporter(Arc::new(r))
        }
    };

    info!("Initialized provider '{}' ({:?})", def.name, def.kind);
    Ok((def.name.clone(), provider))
}
