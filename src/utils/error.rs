use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutoconfError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AutoconfError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AutoconfError::IoError(_) => "Check that the configuration file exists and is readable",
            AutoconfError::TomlError(_) => "Fix the TOML syntax or remove the offending key to use its default",
            AutoconfError::SerializationError(_) => "Try another output format",
            AutoconfError::InvalidConfigValueError { .. } => {
                "Use an absolute path without NUL bytes, or drop the key to use its default"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AutoconfError>;
