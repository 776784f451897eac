use thiserror::Error;

/// Error type for the crypto primitives
#[derive(Error, Debug)]
pub enum Error {
    #[error("PKCS8 error: {0}")]
    Pkcs8Error(#[from] pkcs8::Error),

    #[error("SPKI error: {0}")]
    SpkiError(#[from] pkcs8::spki::Error),

    #[error("DER error: {0}")]
    DerError(#[from] pkcs8::der::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
