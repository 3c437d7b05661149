// Kube-rs based Kubernetes client
pub mod kube_client;
