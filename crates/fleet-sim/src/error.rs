use fleet_core::CoreError;
use fleet_registry::RegistryError;
use thiserror::Error;

use crate::sinks::SinkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("fleet seeding failed: {0}")]
    Seed(#[from] RegistryError),

    #[error("could not load persisted fleet: {0}")]
    Load(#[from] SinkError),
}

pub type SimResult<T> = Result<T, SimError>;
