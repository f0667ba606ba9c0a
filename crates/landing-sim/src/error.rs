use std::io;

use thiserror::Error;

use landing_core::error::ContractError;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Contract(#[from] ContractError),
    #[error("failed to spawn worker thread: {0}")]
    SpawnWorker(#[from] io::Error),
}
