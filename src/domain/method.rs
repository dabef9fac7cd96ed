use crate::error::PaymentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of payment methods offered at checkout.
///
/// Parsing from a string is case-insensitive over the canonical keys
/// (`creditcard`, `paypal`, `banktransfer`). Anything else is rejected with
/// [`PaymentError::UnrecognizedPaymentMethod`].
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::CreditCard,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
    ];

    /// Canonical lowercase key, as accepted by [`FromStr`] and written to CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "creditcard",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::BankTransfer => "banktransfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
        };
        f.write_str(name)
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "creditcard" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::PayPal),
            "banktransfer" => Ok(PaymentMethod::BankTransfer),
            _ => Err(PaymentError::UnrecognizedPaymentMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaymentMethod> for &'static str {
    fn from(method: PaymentMethod) -> Self {
        method.as_str()
    }
}
