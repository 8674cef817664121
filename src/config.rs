use crate::{error::Error, utils::config::get_context_kubeconfig_options, Result};
use kube::{config::Kubeconfig, Client, Config};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location of the kubeconfig below the user's home directory.
pub fn kubeconfig_path<P>(home: P) -> PathBuf
where
    P: AsRef<Path>,
{
    home.as_ref().join(".kube").join("config")
}

/// Reads `<home>/.kube/config` and resolves it for `context`.
pub async fn load<P>(context: &str, home: P) -> Result<Config>
where
    P: AsRef<Path>,
{
    let path = kubeconfig_path(home);
    debug!("reading kubeconfig from {:?}", path);
    let kubeconfig = Kubeconfig::read_from(&path)?;
    let options = get_context_kubeconfig_options(context);
    let config = Config::from_custom_kubeconfig(kubeconfig, &options).await?;
    info!(
        "using context {:?} at {}",
        options.context.as_deref().unwrap_or("<current>"),
        config.cluster_url
    );
    Ok(config)
}

pub fn build_client(config: Config) -> Result<Client> {
    Client::try_from(config).map_err(Error::BuildKubeClientFail)
}

/// Resolves the kubeconfig in the user's home directory and builds a client from it.
pub async fn create_client(context: &str) -> Result<Client> {
    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
    build_client(load(context, home).await?)
}
