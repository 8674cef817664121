use super::Cluster;
use crate::{error::Error, Result};
use async_trait::async_trait;
use k8s_openapi::api::{
    apps::v1::Deployment,
    core::v1::{ConfigMap, Secret},
};
use kube::{api::ListParams, Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::debug;

/// Lists objects across all namespaces of a live cluster.
pub struct KubeCluster {
    pub client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> KubeCluster {
        KubeCluster { client }
    }

    async fn list_all<K>(&self, kind: &'static str) -> Result<Vec<K>>
    where
        K: Resource + Clone + DeserializeOwned + Debug,
        K::DynamicType: Default,
    {
        let api: Api<K> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|source| Error::ListResourceFail { kind, source })?;
        debug!("listed {} {} across all namespaces", list.items.len(), kind);
        Ok(list.items)
    }
}

#[async_trait]
impl Cluster for KubeCluster {
    async fn deployments(&self) -> Result<Vec<Deployment>> {
        self.list_all("deployments").await
    }

    async fn secrets(&self) -> Result<Vec<Secret>> {
        self.list_all("secrets").await
    }

    async fn config_maps(&self) -> Result<Vec<ConfigMap>> {
        self.list_all("configmaps").await
    }
}

