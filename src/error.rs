use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Chyby pri evaluácii modelu
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("value '{value}' in column '{column}' (row {row}) is not a number")]
    Parse {
        column: String,
        row: usize,
        value: String,
    },

    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("cannot deserialize model at {path}: {source}")]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model error: {0}")]
    Model(String),

    #[error("dataset has no rows or no feature columns")]
    EmptyDataset,
}

impl EvalError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EvalError::Io { path: path.into(), source }
    }
}

impl From<smartcore::error::Failed> for EvalError {
    fn from(err: smartcore::error::Failed) -> Self {
        EvalError::Model(err.to_string())
    }
}
