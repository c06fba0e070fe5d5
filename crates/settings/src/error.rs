//! Result and Error types for stools-settings

/// Type alias for Result<T, settings::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `stools-settings` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise settings")]
    FailedSerde(#[from] serde_json::Error),
}
