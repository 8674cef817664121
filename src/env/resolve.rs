use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use tracing::{debug, warn};

fn object_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or_default()
}

/// Appends `KEY=VALUE` for every non-empty key of each Secret named in
/// `names`. Secret bytes are decoded lossily. Names without a matching
/// Secret are skipped; a name matching several Secrets appends all of them.
pub fn resolve_secrets(names: &[String], secrets: &[Secret], lines: &mut Vec<String>) {
    for name in names {
        let mut found = false;
        for secret in secrets
            .iter()
            .filter(|s| object_name(&s.metadata.name) == name.as_str())
        {
            found = true;
            debug!(
                "resolving secret {}/{}",
                object_name(&secret.metadata.namespace),
                name
            );
            for (key, value) in secret.data.iter().flatten() {
                if value.0.is_empty() {
                    continue;
                }
                lines.push(format!("{}={}", key, String::from_utf8_lossy(&value.0)));
            }
        }
        if !found {
            warn!("secret {} is referenced but does not exist", name);
        }
    }
}

/// Same as [`resolve_secrets`] for ConfigMap string data.
pub fn resolve_config_maps(names: &[String], config_maps: &[ConfigMap], lines: &mut Vec<String>) {
    for name in names {
        let mut found = false;
        for config_map in config_maps
            .iter()
            .filter(|c| object_name(&c.metadata.name) == name.as_str())
        {
            found = true;
            debug!(
                "resolving configmap {}/{}",
                object_name(&config_map.metadata.namespace),
                name
            );
            for (key, value) in config_map.data.iter().flatten() {
                if value.is_empty() {
                    continue;
                }
                lines.push(format!("{}={}", key, value));
            }
        }
        if !found {
            warn!("configmap {} is referenced but does not exist", name);
        }
    }
}
