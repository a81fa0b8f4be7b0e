use crate::dataset::DatasetError;
use crate::types::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
