pub mod k8s;
pub mod reporter_trait;
pub mod resource_target;

pub use reporter_trait::Reporter;
pub use resource_target::ResourceTarget;
