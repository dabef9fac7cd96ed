use crate::application::factory::PaymentFactory;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::PaymentStrategy;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// The fee quoted for a single checkout.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FeeQuote {
    pub method: String,
    pub amount: f64,
    pub fee: f64,
}

/// Processes one transaction with `strategy` and quotes its fee.
///
/// The status line produced by the processing step is written to `out`.
pub fn checkout(
    strategy: &dyn PaymentStrategy,
    amount: f64,
    out: &mut dyn Write,
) -> Result<FeeQuote> {
    strategy.process_transaction(out)?;
    let fee = strategy.calculate_transaction_fees(amount);
    tracing::info!(method = strategy.name(), amount, fee, "checkout complete");

    Ok(FeeQuote {
        method: strategy.name().to_string(),
        amount,
        fee,
    })
}

/// Runs checkouts against a payment factory.
pub struct CheckoutService<F: PaymentFactory> {
    factory: F,
}

impl<F: PaymentFactory> CheckoutService<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn checkout(
        &self,
        method: PaymentMethod,
        amount: f64,
        out: &mut dyn Write,
    ) -> Result<FeeQuote> {
        let strategy = self.factory.create_payment_type(method);
        checkout(strategy.as_ref(), amount, out)
    }

    /// Same as [`Self::checkout`], selecting the method by case-insensitive name.
    pub fn checkout_by_name(
        &self,
        name: &str,
        amount: f64,
        out: &mut dyn Write,
    ) -> Result<FeeQuote> {
        let strategy = self.factory.create_payment_type_by_name(name)?;
        checkout(strategy.as_ref(), amount, out)
    }
}
