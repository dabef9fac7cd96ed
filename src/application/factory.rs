use crate::config::FeeSchedule;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::PaymentStrategyBox;
use crate::domain::strategy::{BankTransfer, CreditCard, PayPal};
use crate::error::Result;

/// Resolves a payment method to the strategy that implements it.
pub trait PaymentFactory: Send + Sync {
    /// Builds a fresh strategy for `method`. Infallible: the set of methods is closed.
    fn create_payment_type(&self, method: PaymentMethod) -> PaymentStrategyBox;

    /// Builds a strategy from a case-insensitive method name.
    ///
    /// Fails with `UnrecognizedPaymentMethod` when the name is not one of the
    /// built-in methods; no strategy is constructed in that case.
    fn create_payment_type_by_name(&self, name: &str) -> Result<PaymentStrategyBox> {
        let method: PaymentMethod = name.parse()?;
        Ok(self.create_payment_type(method))
    }
}

/// The built-in factory, configured with a fee schedule.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentCreator {
    fees: FeeSchedule,
}

impl PaymentCreator {
    /// Creates a factory whose strategies charge according to `fees`.
    pub fn new(fees: FeeSchedule) -> Self {
        Self { fees }
    }

    pub fn fees(&self) -> &FeeSchedule {
        &self.fees
    }
}

impl PaymentFactory for PaymentCreator {
    fn create_payment_type(&self, method: PaymentMethod) -> PaymentStrategyBox {
        match method {
            PaymentMethod::CreditCard => Box::new(CreditCard::new(self.fees.credit_card_rate)),
            PaymentMethod::PayPal => {
                Box::new(PayPal::new(self.fees.paypal_fixed, self.fees.paypal_rate))
            }
            PaymentMethod::BankTransfer => Box::new(BankTransfer::new(self.fees.bank_transfer_fixed)),
        }
    }
}
