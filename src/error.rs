use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("invalid normalization range: min {min} must be below max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("please enter a startup idea")]
    EmptyPitch,

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
