pub mod provider_trait;

pub use provider_trait::{Provider, ProviderIdentity};
