// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    /// The key string does not have the shape the algorithm needs
    /// (e.g. a non-numeric Caesar shift).
    #[error("Invalid key format for {algorithm}: {key:?}")]
    InvalidKeyFormat { algorithm: String, key: String },

    /// The key is well-typed but unusable (e.g. fewer than two rails).
    #[error("Invalid key value: {0}")]
    InvalidKeyValue(String),

    #[error("Hill key matrix is not invertible mod 26 (determinant {determinant})")]
    NonInvertibleMatrix { determinant: i64 },

    #[error("Unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for CipherError {
    fn from(err: toml::de::Error) -> Self {
        CipherError::Config(err.to_string())
    }
}
