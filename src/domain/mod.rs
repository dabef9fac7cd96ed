//! Domain layer: payment methods and the strategies that implement them.

pub mod method;
pub mod ports;
pub mod strategy;
