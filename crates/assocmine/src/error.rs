use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssocError {
    #[error("Invalid threshold: {name} = {value} (expected {expected})")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Dataset contains no transactions")]
    EmptyInput,

    #[error("Closure invariant violated: subset {0} of a frequent itemset is missing")]
    BrokenClosure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset not found: {0}")]
    DatasetNotFound(PathBuf),

    #[error("Invalid column pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Column '{column}' contains the item separator '{separator}'")]
    AmbiguousColumn { column: String, separator: String },

    #[error("Itemset of {len} items is too large to split into rules (max {max})")]
    ItemsetTooLarge { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, AssocError>;
