use std::path::{Path, PathBuf};

use anyhow::Context;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

use crate::errors::{ProviderError, Result};

/// Where the cluster connection settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionProfile {
    /// Service-account token and CA mounted into the pod.
    InCluster,
    /// Kubeconfig file on disk.
    Kubeconfig(PathBuf),
}

/// Default kubeconfig location under a home directory.
pub fn default_kubeconfig_path(home: &Path) -> PathBuf {
    home.join(".kube").join("config")
}

/// Current user's home directory, if one can be determined.
///
/// Falls back to the account database when `HOME` is unset.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().filter(|h| !h.as_os_str().is_empty())
}

/// Pick the connection profile: in-cluster wins, then an explicit path,
/// then `<home>/.kube/config`.
pub fn resolve_connection_profile(
    in_cluster: bool,
    config_path: &str,
    home: Option<PathBuf>,
) -> Result<ConnectionProfile> {
    if in_cluster {
        return Ok(ConnectionProfile::InCluster);
    }
    if !config_path.is_empty() {
        return Ok(ConnectionProfile::Kubeconfig(PathBuf::from(config_path)));
    }
    match home {
        Some(home) => Ok(ConnectionProfile::Kubeconfig(default_kubeconfig_path(&home))),
        None => Err(ProviderError::bad_config(
            "can't locate home directory to read default kubernetes config file, \
             to run in cluster, set inCluster config setting to true",
        )),
    }
}

/// Load client settings for a resolved profile.
pub async fn load_kube_config(profile: &ConnectionProfile) -> Result<Config> {
    let config = match profile {
        ConnectionProfile::InCluster => {
            debug!("Using in-cluster configuration");
            Config::incluster().context("failed to load in-cluster kubernetes config")?
        }
        ConnectionProfile::Kubeconfig(path) => {
            debug!("Using kubeconfig at {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("failed to read kubeconfig {}", path.display()))?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .with_context(|| format!("invalid kubeconfig {}", path.display()))?
        }
    };
    Ok(config)
}

/// Creates a Kubernetes client for the given profile.
pub async fn build_kube_client(profile: &ConnectionProfile) -> Result<Client> {
    let config = load_kube_config(profile).await?;
    let client = Client::try_from(config)?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
