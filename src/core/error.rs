use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeSimError {
    #[error("Name must be at least {min} characters long, got {name:?}")]
    InvalidName { name: String, min: usize },

    #[error("At least one personality trait must be selected")]
    NoTraits,

    #[error("At most {max} personality traits may be selected, got {count}")]
    TooManyTraits { count: usize, max: usize },

    #[error("At most {max} life values may be selected, got {count}")]
    TooManyValues { count: usize, max: usize },

    #[error("Event type {0} not found")]
    UnknownEvent(String),

    #[error("Unknown {kind} key: {key}")]
    UnknownKey { kind: &'static str, key: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeSimError>;
