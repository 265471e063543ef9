use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridcastError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
