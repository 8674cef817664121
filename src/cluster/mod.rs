pub mod lister;
pub use lister::*;

use crate::Result;
use async_trait::async_trait;
use k8s_openapi::api::{
    apps::v1::Deployment,
    core::v1::{ConfigMap, Secret},
};

/// Cluster-wide listing of the objects a `.env` is built from.
#[async_trait]
pub trait Cluster: Sync + Send {
    async fn deployments(&self) -> Result<Vec<Deployment>>;
    async fn secrets(&self) -> Result<Vec<Secret>>;
    async fn config_maps(&self) -> Result<Vec<ConfigMap>>;
}
