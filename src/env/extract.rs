use k8s_openapi::api::{apps::v1::Deployment, core::v1::Container};
use tracing::debug;

/// What the matched deployments' containers contribute to the `.env`.
///
/// `lines` already holds the direct `env` entries as `KEY=VALUE`. The
/// reference names are kept in collection order, duplicates included.
#[derive(Debug, Default, PartialEq)]
pub struct References {
    pub lines: Vec<String>,
    pub config_maps: Vec<String>,
    pub secrets: Vec<String>,
}

/// Keeps deployments whose name contains `filter`. An empty filter keeps all.
pub fn filter_deployments<'a>(deployments: &'a [Deployment], filter: &str) -> Vec<&'a Deployment> {
    deployments
        .iter()
        .filter(|d| deployment_name(d).contains(filter))
        .collect()
}

pub fn deployment_name(deployment: &Deployment) -> &str {
    deployment.metadata.name.as_deref().unwrap_or_default()
}

fn deployment_containers(deployment: &Deployment) -> &[Container] {
    deployment
        .spec
        .as_ref()
        .and_then(|spec| spec.template.spec.as_ref())
        .map(|pod| pod.containers.as_slice())
        .unwrap_or_default()
}

pub fn extract_references<'a, I>(deployments: I) -> References
where
    I: IntoIterator<Item = &'a Deployment>,
{
    let mut refs = References::default();
    for deployment in deployments {
        debug!("extracting env of deployment {}", deployment_name(deployment));
        for container in deployment_containers(deployment) {
            extract_container(container, &mut refs);
        }
    }
    refs
}

fn extract_container(container: &Container, refs: &mut References) {
    let env_from = container.env_from.as_deref().unwrap_or_default();
    let env = container.env.as_deref().unwrap_or_default();
    if env_from.is_empty() && env.is_empty() {
        return;
    }

    for source in env_from {
        if let Some(cm_ref) = &source.config_map_ref {
            refs.config_maps.push(cm_ref.name.clone());
        }
        if let Some(sec_ref) = &source.secret_ref {
            refs.secrets.push(sec_ref.name.clone());
        }
    }

    for var in env {
        refs.lines.push(format!(
            "{}={}",
            var.name,
            var.value.as_deref().unwrap_or_default()
        ));
    }
}
