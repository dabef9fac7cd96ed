use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Unrecognized payment method: {0:?}")]
    UnrecognizedPaymentMethod(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] config::ConfigError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
