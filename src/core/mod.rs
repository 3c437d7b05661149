pub mod client;
pub mod config;
pub mod context;
pub mod provider;
pub mod registry;
pub mod reporter;
pub mod state_store;
