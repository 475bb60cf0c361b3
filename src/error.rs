use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No plan generated")]
    NoPlan,

    #[error("Plan not found: {0}")]
    PlanNotFound(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
