use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorsairError {
    #[error("Unknown ammo type: {0}")]
    UnknownAmmoType(String),

    #[error("Unknown move: {0}")]
    UnknownMoveId(String),

    #[error("Unknown guard zone: {0}")]
    UnknownZone(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CorsairError>;
