use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unknown predicate: {0}")]
    MissingPredicate(String),

    #[error("Invalid match pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    #[error("Mapper has no rule bound")]
    RuleUnbound,
}

pub type Result<T> = std::result::Result<T, PrepError>;
