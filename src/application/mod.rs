//! Application layer: resolving payment methods to strategies and running checkouts.
//!
//! `PaymentCreator` covers the closed set of built-in methods, while
//! `StrategyRegistry` accepts additional methods registered by name.

pub mod checkout;
pub mod factory;
pub mod registry;
