pub mod env_resolver;
pub mod property_parser;
pub mod provider_config;

pub use env_resolver::{resolve_env, resolve_env_with, ENV_PREFIX};
pub use property_parser::{parse_field, read_string};
pub use provider_config::ProviderConfig;
