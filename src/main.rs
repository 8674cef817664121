use clap::Parser;
use kubenv::{
    args::Args,
    cluster::KubeCluster,
    config::create_client,
    env::{collect, write_env_file, ENV_FILE_PATH},
};
use tracing::*;
use tracing_subscriber::EnvFilter;

async fn run(args: Args) -> kubenv::Result<()> {
    let client = create_client(&args.context).await?;
    let cluster = KubeCluster::new(client);
    let lines = collect(&cluster, &args.deployment).await?;
    write_env_file(ENV_FILE_PATH, &lines)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,kubenv=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("{}", e);
        return Err(e.into());
    }
    println!("Environment variables written to {}", ENV_FILE_PATH);
    Ok(())
}
