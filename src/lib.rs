//! Pluggable state and status providers.
//!
//! Two capabilities share one lifecycle contract ([`Provider`]):
//! entity storage ([`StateProvider`], backed in-process by
//! [`MemoryStateProvider`]) and status reporting ([`Reporter`], backed by
//! custom resources through [`K8sReporter`]). A [`ProviderRegistry`] builds
//! them from declarative definitions and hands them out by name.

pub mod core;
pub mod errors;
pub mod logging;

pub use crate::core::context::ManagerContext;
pub use crate::core::provider::{Provider, ProviderIdentity};
pub use crate::core::registry::{ProviderDefinition, ProviderKind, ProviderRegistry};
pub use crate::core::reporter::k8s::{K8sReporter, K8sReporterConfig};
pub use crate::core::reporter::{Reporter, ResourceTarget};
pub use crate::core::state_store::memory::{MemoryStateProvider, MemoryStateProviderConfig};
pub use crate::core::state_store::{
    DeleteRequest, GetRequest, ListRequest, StateEntry, StateProvider, UpsertRequest,
};
pub use crate::errors::{ProviderError, Result};
