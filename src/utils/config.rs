use kube::config::KubeConfigOptions;

/// An empty context selects the kubeconfig's current-context.
pub fn get_context_kubeconfig_options(context: &str) -> KubeConfigOptions {
    KubeConfigOptions {
        context: (!context.is_empty()).then(|| context.to_owned()),
        cluster: None,
        user: None,
    }
}
