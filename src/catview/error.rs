use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatviewError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No cached snapshot under key '{0}'")]
    CacheMiss(String),

    #[error("Invalid {field} filter value: '{value}' is not a number")]
    UnparseableFilterValue { field: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatviewError>;
