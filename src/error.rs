use thiserror::Error;

/// Failures while building an ingredient list from a file or manual records
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read ingredient file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Row {row}: quantity '{value}' is not a number")]
    InvalidQuantity { row: usize, value: String },

    #[error("Row {row}: quantity {value} is negative")]
    NegativeQuantity { row: usize, value: f64 },

    #[error("Row {row}: ingredient name is blank")]
    BlankName { row: usize },

    #[error("Number of ingredients must be at least 1")]
    NoManualRecords,

    #[error("Number of ingredients {count} exceeds the limit of {max}")]
    TooManyRecords { count: usize, max: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum ScaleError {
    #[error("Number of guests must be at least 1")]
    NoGuests,
}

#[derive(Error, Debug)]
pub enum CateringError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Scale error: {0}")]
    Scale(#[from] ScaleError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CateringError>;
