pub mod memory_state_config;
pub mod memory_state_provider;

pub use memory_state_config::MemoryStateProviderConfig;
pub use memory_state_provider::MemoryStateProvider;
