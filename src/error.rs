use kube::config::KubeconfigError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not determine the user's home directory")]
    HomeDirNotFound,

    #[error("load Kubeconfig failed: {0}")]
    LoadKubeconfigFail(#[from] KubeconfigError),

    #[error("build kube-client failed: {0}")]
    BuildKubeClientFail(#[source] kube::Error),

    #[error("list {kind} failed: {source}")]
    ListResourceFail {
        kind: &'static str,
        #[source]
        source: kube::Error,
    },

    #[error("create {path:?} failed: {source}")]
    CreateEnvFileFail {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write {path:?} failed: {source}")]
    WriteEnvFileFail {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("close {path:?} failed: {source}")]
    CloseEnvFileFail {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
