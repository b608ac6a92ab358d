use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no unused registration plate found after {attempts} attempts — fleet too large for the identifier space")]
    PlateSpaceExhausted { attempts: usize },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
