use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to parse registry JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Duplicate chain id '{0}' in registry snapshot")]
    DuplicateChain(String),

    #[error("Duplicate token id '{0}' in registry snapshot")]
    DuplicateToken(String),
}
