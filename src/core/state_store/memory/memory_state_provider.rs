use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::core::context::ManagerContext;
use crate::core::provider::{Provider, ProviderIdentity};
use crate::core::state_store::memory::memory_state_config::MemoryStateProviderConfig;
use crate::core::state_store::state_entity::{
    DeleteRequest, GetRequest, ListRequest, StateEntry, UpsertRequest,
};
use crate::core::state_store::state_provider_trait::StateProvider;
use crate::errors::{ProviderError, Result};

/// In-process state store keyed by entry id.
///
/// Entries live in a `BTreeMap`, so listing is ordered by id and stable
/// across calls. Readers share the lock, writers take it exclusively.
/// Nothing is persisted: the data goes away with the instance.
#[derive(Debug, Default)]
pub struct MemoryStateProvider {
    config: MemoryStateProviderConfig,
    data: Arc<RwLock<BTreeMap<String, StateEntry>>>,
    context: Option<Arc<ManagerContext>>,
}

impl MemoryStateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &MemoryStateProviderConfig {
        &self.config
    }

    pub fn context(&self) -> Option<&Arc<ManagerContext>> {
        self.context.as_ref()
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

impl ProviderIdentity for MemoryStateProvider {
    fn id(&self) -> &str {
        &self.config.name
    }
}

#[async_trait]
impl Provider for MemoryStateProvider {
    type Config = MemoryStateProviderConfig;

    async fn init(&mut self, config: MemoryStateProviderConfig) -> Result<()> {
        debug!("Initializing memory state provider '{}'", config.name);
        self.config = config;
        Ok(())
    }

    fn set_context(&mut self, context: Arc<ManagerContext>) {
        self.context = Some(context);
    }

    async fn clone_with(&self, config: Option<MemoryStateProviderConfig>) -> Result<Self> {
        let mut ret = MemoryStateProvider::new();
        ret.init(config.unwrap_or_else(|| self.config.clone())).await?;
        ret.context = self.context.clone();
        Ok(ret)
    }
}

#[async_trait]
impl StateProvider for MemoryStateProvider {
    async fn upsert(&self, req: UpsertRequest) -> Result<String> {
        let id = req.value.id.clone();
        let mut guard = self.data.write().await;
        guard.insert(id.clone(), req.value);

        debug!("Upserted entry '{}' ({} total)", id, guard.len());
        Ok(id)
    }

    async fn get(&self, req: GetRequest) -> Result<StateEntry> {
        let guard = self.data.read().await;
        guard
            .get(&req.id)
            .cloned()
            .ok_or_else(|| ProviderError::not_found(format!("entry '{}' is not found", req.id)))
    }

    async fn list(&self, req: ListRequest) -> Result<(Vec<StateEntry>, Option<String>)> {
        let guard = self.data.read().await;

        let start = match req.continuation_token {
            Some(token) => Bound::Excluded(token),
            None => Bound::Unbounded,
        };
        let mut iter = guard.range((start, Bound::Unbounded)).map(|(_, e)| e.clone());

        // A zero page size means "no limit".
        let entries: Vec<StateEntry> = match req.max_count.filter(|n| *n > 0) {
            Some(n) => iter.by_ref().take(n).collect(),
            None => iter.by_ref().collect(),
        };

        let token = if iter.next().is_some() {
            entries.last().map(|e| e.id.clone())
        } else {
            None
        };

        debug!("Listed {} entry(ies), more pages: {}", entries.len(), token.is_some());
        Ok((entries, token))
    }

    async fn delete(&self, req: DeleteRequest) -> Result<()> {
        let removed = self.data.write().await.remove(&req.id);
        if removed.is_none() {
            debug!("Delete of absent entry '{}' ignored", req.id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ProviderConfig;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestPayload {
        name: String,
        value: i64,
    }

    fn sample_entry(id: &str) -> StateEntry {
        StateEntry::from_payload(
            id,
            &TestPayload {
                name: "Random name".into(),
                value: 12345,
            },
        )
        .unwrap()
    }

    async fn init_provider() -> MemoryStateProvider {
        let mut provider = MemoryStateProvider::new();
        provider
            .init(MemoryStateProviderConfig::default())
            .await
            .expect("init with empty config should succeed");
        provider
    }

    #[tokio::test]
    async fn init_with_empty_config() {
        let mut provider = MemoryStateProvider::new();
        assert!(provider.init(MemoryStateProviderConfig::default()).await.is_ok());
        assert!(provider.init_with_map(&HashMap::new()).await.is_ok());
        assert_eq!(provider.id(), "");
    }

    #[tokio::test]
    async fn init_with_map_resolves_env_reference() {
        std::env::set_var("STATEHUB_MEMORY_NAME_TEST", "real-name");
        let mut provider = MemoryStateProvider::new();
        let props: HashMap<String, String> = [(
            "name".to_string(),
            "$env:STATEHUB_MEMORY_NAME_TEST".to_string(),
        )]
        .into_iter()
        .collect();
        provider.init_with_map(&props).await.unwrap();
        assert_eq!(provider.id(), "real-name");
    }

    #[tokio::test]
    async fn upsert_returns_id() {
        let provider = init_provider().await;
        let id = provider.upsert(UpsertRequest::new(sample_entry("123"))).await.unwrap();
        assert_eq!(id, "123");
    }

    #[tokio::test]
    async fn upsert_replaces_existing_body() {
        let provider = init_provider().await;
        provider.upsert(UpsertRequest::new(sample_entry("123"))).await.unwrap();
        provider
            .upsert(UpsertRequest::new(StateEntry::new("123", serde_json::json!({"v": 2}))))
            .await
            .unwrap();

        let entry = provider.get(GetRequest::new("123")).await.unwrap();
        assert_eq!(entry.body, serde_json::json!({"v": 2}));
        assert_eq!(provider.len().await, 1);
    }

    #[tokio::test]
    async fn get_round_trips_body_and_reports_not_found() {
        let provider = init_provider().await;
        provider.upsert(UpsertRequest::new(sample_entry("123"))).await.unwrap();

        let entry = provider.get(GetRequest::new("123")).await.unwrap();
        assert_eq!(entry.id, "123");
        let payload: TestPayload = entry.payload().unwrap();
        assert_eq!(payload.name, "Random name");
        assert_eq!(payload.value, 12345);

        let err = provider.get(GetRequest::new("890")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_then_delete_scenario() {
        let provider = init_provider().await;
        provider.upsert(UpsertRequest::new(sample_entry("123"))).await.unwrap();

        let (entries, token) = provider.list(ListRequest::default()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "123");
        assert!(token.is_none());

        provider.delete(DeleteRequest::new("123")).await.unwrap();
        let (entries, _) = provider.list(ListRequest::default()).await.unwrap();
        assert!(entries.is_empty());

        let err = provider.get(GetRequest::new("123")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_on_empty_store() {
        let provider = init_provider().await;
        let (entries, token) = provider.list(ListRequest::default()).await.unwrap();
        assert!(entries.is_empty());
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn empty_id_is_a_valid_key() {
        let provider = init_provider().await;
        let id = provider.upsert(UpsertRequest::new(sample_entry(""))).await.unwrap();
        assert_eq!(id, "");

        let (entries, _) = provider.list(ListRequest::default()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "");

        let entry = provider.get(GetRequest::new("")).await.unwrap();
        assert_eq!(entry.payload::<TestPayload>().unwrap().value, 12345);
        assert!(provider.get(GetRequest::new("890")).await.unwrap_err().is_not_found());

        provider.delete(DeleteRequest::new("")).await.unwrap();
        assert!(provider.is_empty().await);
    }

    #[tokio::test]
    async fn delete_of_absent_id_succeeds() {
        let provider = init_provider().await;
        assert!(provider.delete(DeleteRequest::new("never-there")).await.is_ok());
    }

    #[tokio::test]
    async fn paging_visits_every_entry_once() {
        let provider = init_provider().await;
        for id in ["", "a", "b", "c", "d"] {
            provider.upsert(UpsertRequest::new(sample_entry(id))).await.unwrap();
        }

        let mut seen = Vec::new();
        let mut token = None;
        loop {
            let (page, next) = provider
                .list(ListRequest {
                    continuation_token: token,
                    max_count: Some(2),
                })
                .await
                .unwrap();
            assert!(page.len() <= 2);
            seen.extend(page.into_iter().map(|e| e.id));
            match next {
                Some(t) => token = Some(t),
                None => break,
            }
        }
        assert_eq!(seen, vec!["", "a", "b", "c", "d"]);
    }

    #[tokio::test]
    async fn exact_page_has_no_token() {
        let provider = init_provider().await;
        for id in ["a", "b"] {
            provider.upsert(UpsertRequest::new(sample_entry(id))).await.unwrap();
        }
        let (page, token) = provider
            .list(ListRequest {
                continuation_token: None,
                max_count: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn concurrent_upserts_are_all_visible() {
        let provider = Arc::new(init_provider().await);
        let mut handles = Vec::new();
        for i in 0..32 {
            let p = provider.clone();
            handles.push(tokio::spawn(async move {
                p.upsert(UpsertRequest::new(sample_entry(&format!("id-{:02}", i))))
                    .await
            }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }
        let (entries, _) = provider.list(ListRequest::default()).await.unwrap();
        assert_eq!(entries.len(), 32);
        assert!(entries.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn clone_without_config_reuses_own_config() {
        let mut provider = MemoryStateProvider::new();
        provider
            .init(MemoryStateProviderConfig { name: "tenant-a".into() })
            .await
            .unwrap();
        provider.set_context(Arc::new(ManagerContext::new("state-manager")));
        provider.upsert(UpsertRequest::new(sample_entry("123"))).await.unwrap();

        let cloned = provider.clone_with(None).await.unwrap();
        assert_eq!(cloned.config().name(), "tenant-a");
        assert_eq!(cloned.context().unwrap().name, "state-manager");
        // independent store
        assert!(cloned.is_empty().await);
        assert_eq!(provider.len().await, 1);
    }

    #[tokio::test]
    async fn clone_with_config_applies_it() {
        let provider = init_provider().await;
        let cloned = provider
            .clone_with(Some(MemoryStateProviderConfig { name: "tenant-b".into() }))
            .await
            .unwrap();
        assert_eq!(cloned.id(), "tenant-b");
        assert_eq!(provider.id(), "");
    }
}
