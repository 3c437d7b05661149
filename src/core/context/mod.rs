pub mod manager_context;

pub use manager_context::ManagerContext;
