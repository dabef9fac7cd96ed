use crate::application::factory::{PaymentCreator, PaymentFactory};
use crate::config::FeeSchedule;
use crate::domain::method::PaymentMethod;
use crate::domain::ports::{PaymentStrategyBox, PaymentStrategyFactory};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;

/// A name-keyed table of strategy factories, open to extension.
///
/// Unlike [`PaymentCreator`], which only knows the built-in methods, the
/// registry lets callers plug in additional payment methods at runtime.
/// Names are matched case-insensitively.
#[derive(Default)]
pub struct StrategyRegistry {
    factories: HashMap<String, PaymentStrategyFactory>,
}

impl StrategyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-loaded with the built-in methods.
    pub fn with_builtin(fees: FeeSchedule) -> Self {
        let mut registry = Self::new();
        for method in PaymentMethod::ALL {
            let creator = PaymentCreator::new(fees);
            registry.register(
                method.as_str(),
                Box::new(move || creator.create_payment_type(method)),
            );
        }
        registry
    }

    /// Registers `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, factory: PaymentStrategyFactory) {
        let key = name.to_lowercase();
        if self.factories.insert(key.clone(), factory).is_some() {
            tracing::debug!(name = %key, "replaced payment strategy");
        }
    }

    /// Builds a new strategy for `name`.
    pub fn resolve(&self, name: &str) -> Result<PaymentStrategyBox> {
        self.factories
            .get(&name.to_lowercase())
            .map(|factory| factory())
            .ok_or_else(|| PaymentError::UnrecognizedPaymentMethod(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
