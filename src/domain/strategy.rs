use super::method::PaymentMethod;
use super::ports::PaymentStrategy;
use std::io::{self, Write};

fn report(method: PaymentMethod, out: &mut dyn Write) -> io::Result<()> {
    tracing::debug!(method = method.as_str(), "processing transaction");
    writeln!(out, "Processing via {method}")
}

/// Card payments: a percentage of the amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditCard {
    rate: f64,
}

impl CreditCard {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl PaymentStrategy for CreditCard {
    fn name(&self) -> &str {
        PaymentMethod::CreditCard.as_str()
    }

    fn process_transaction(&self, out: &mut dyn Write) -> io::Result<()> {
        report(PaymentMethod::CreditCard, out)
    }

    fn calculate_transaction_fees(&self, amount: f64) -> f64 {
        self.rate * amount
    }
}

/// PayPal payments: a flat fee plus a percentage of the amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayPal {
    fixed: f64,
    rate: f64,
}

impl PayPal {
    pub fn new(fixed: f64, rate: f64) -> Self {
        Self { fixed, rate }
    }
}

impl PaymentStrategy for PayPal {
    fn name(&self) -> &str {
        PaymentMethod::PayPal.as_str()
    }

    fn process_transaction(&self, out: &mut dyn Write) -> io::Result<()> {
        report(PaymentMethod::PayPal, out)
    }

    fn calculate_transaction_fees(&self, amount: f64) -> f64 {
        self.fixed + self.rate * amount
    }
}

/// Bank transfers: a flat fee regardless of the amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankTransfer {
    fixed: f64,
}

impl BankTransfer {
    pub fn new(fixed: f64) -> Self {
        Self { fixed }
    }
}

impl PaymentStrategy for BankTransfer {
    fn name(&self) -> &str {
        PaymentMethod::BankTransfer.as_str()
    }

    fn process_transaction(&self, out: &mut dyn Write) -> io::Result<()> {
        report(PaymentMethod::BankTransfer, out)
    }

    fn calculate_transaction_fees(&self, _amount: f64) -> f64 {
        self.fixed
    }
}
