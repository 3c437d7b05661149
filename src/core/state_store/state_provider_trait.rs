use async_trait::async_trait;

use crate::core::provider::ProviderIdentity;
use crate::core::state_store::state_entity::{
    DeleteRequest, GetRequest, ListRequest, StateEntry, UpsertRequest,
};
use crate::errors::Result;

/// CRUD capability every state backend exposes.
#[async_trait]
pub trait StateProvider: ProviderIdentity {
    /// Insert or replace `req.value`; returns its id.
    async fn upsert(&self, req: UpsertRequest) -> Result<String>;

    /// Fails with `ProviderError::NotFound` when the id is absent.
    async fn get(&self, req: GetRequest) -> Result<StateEntry>;

    /// One page of entries plus the token for the next page, if any.
    async fn list(&self, req: ListRequest) -> Result<(Vec<StateEntry>, Option<String>)>;

    async fn delete(&self, req: DeleteRequest) -> Result<()>;
}
