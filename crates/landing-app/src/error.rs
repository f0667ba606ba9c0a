use std::io;
use std::path::PathBuf;

use thiserror::Error;

use landing_core::error::ContractError;
use landing_sim::error::SimError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Contract(#[from] ContractError),
    #[error(transparent)]
    Sim(#[from] SimError),
}
