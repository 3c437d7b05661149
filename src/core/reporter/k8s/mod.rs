pub mod k8s_reporter;
pub mod k8s_reporter_config;
pub mod k8s_status_merge;
pub mod k8s_status_store;

#[cfg(test)]
pub(crate) mod fake_status_store;

pub use k8s_reporter::K8sReporter;
pub use k8s_reporter_config::K8sReporterConfig;
pub use k8s_status_merge::{existing_properties, merge_status, status_object, STATUS_KIND};
pub use k8s_status_store::{KubeStatusStore, StatusStore};
