use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid map at line {line}, column {column}: unexpected {symbol:?}")]
    InvalidMap {
        line: usize,
        column: usize,
        symbol: char,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
