pub mod args;
pub mod cluster;
pub mod config;
pub mod env;
pub mod error;
pub mod utils;

pub type Result<T> = std::result::Result<T, error::Error>;
