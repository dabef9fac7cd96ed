use std::io::{self, Write};

/// Behavior shared by every payment method offered at checkout.
///
/// Implementations are immutable, so a single instance may be shared across
/// threads or kept around for repeated use.
pub trait PaymentStrategy: Send + Sync {
    /// Canonical lowercase name of the payment method, e.g. `creditcard`.
    fn name(&self) -> &str;

    /// Runs the processing step, reporting a status line to `out`.
    fn process_transaction(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Fee charged for a transaction of `amount`. Pure.
    fn calculate_transaction_fees(&self, amount: f64) -> f64;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
pub type PaymentStrategyFactory = Box<dyn Fn() -> PaymentStrategyBox + Send + Sync>;
