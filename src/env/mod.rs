pub mod extract;
pub mod resolve;
pub mod writer;
pub use extract::*;
pub use resolve::*;
pub use writer::*;

use crate::{cluster::Cluster, Result};
use tracing::info;

/// Builds the ordered `KEY=VALUE` lines for deployments whose name contains
/// `filter`: direct env entries first, then resolved Secrets, then resolved
/// ConfigMaps. Lines are not escaped yet.
pub async fn collect<C>(cluster: &C, filter: &str) -> Result<Vec<String>>
where
    C: Cluster + ?Sized,
{
    let deployments = cluster.deployments().await?;
    let matched = filter_deployments(&deployments, filter);
    info!(
        "{} of {} deployments match {:?}",
        matched.len(),
        deployments.len(),
        filter
    );

    let References {
        mut lines,
        config_maps,
        secrets,
    } = extract_references(matched);
    info!(
        "collected {} env vars, {} configmap and {} secret references",
        lines.len(),
        config_maps.len(),
        secrets.len()
    );

    let cluster_secrets = cluster.secrets().await?;
    let cluster_config_maps = cluster.config_maps().await?;

    resolve_secrets(&secrets, &cluster_secrets, &mut lines);
    resolve_config_maps(&config_maps, &cluster_config_maps, &mut lines);
    Ok(lines)
}
