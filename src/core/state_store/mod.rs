pub mod memory;
pub mod state_entity;
pub mod state_provider_trait;

pub use state_entity::{DeleteRequest, GetRequest, ListRequest, StateEntry, UpsertRequest};
pub use state_provider_trait::StateProvider;
