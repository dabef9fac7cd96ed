use crate::error::Result;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// Fee constants applied by the built-in payment strategies.
///
/// Keys missing from a loaded file keep their default values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Percentage charged on card payments, as a fraction of the amount.
    pub credit_card_rate: f64,
    /// Flat part of the PayPal fee.
    pub paypal_fixed: f64,
    /// Percentage part of the PayPal fee.
    pub paypal_rate: f64,
    /// Flat fee for bank transfers, independent of the amount.
    pub bank_transfer_fixed: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            credit_card_rate: 0.02,
            paypal_fixed: 1.0,
            paypal_rate: 0.02,
            bank_transfer_fixed: 2.0,
        }
    }
}

impl FeeSchedule {
    /// Loads a fee schedule from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_string_lossy().into_owned();
        let builder = Config::builder().add_source(File::new(&path, FileFormat::Toml));

        let schedule: FeeSchedule = builder.build()?.try_deserialize()?;
        tracing::debug!(?schedule, %path, "loaded fee schedule");

        Ok(schedule)
    }
}
