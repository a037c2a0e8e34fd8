use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreenhouseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Self-check failed: {0}")]
    SelfCheck(String),
}

pub type Result<T> = std::result::Result<T, GreenhouseError>;
