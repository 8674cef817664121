use clap::Parser;

/// Writes the environment of matching deployments to a local .env file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Kubernetes context to use, empty for the kubeconfig's current context
    #[arg(long, default_value_t = String::new())]
    pub context: String,

    /// Substring a deployment name must contain, empty matches all
    #[arg(long, default_value_t = String::new())]
    pub deployment: String,
}
