pub mod provider_definition;
pub mod provider_registry;

pub use provider_definition::{ProviderDefinition, ProviderKind};
pub use provider_registry::{ProviderRegistry, RegisteredProvider};
