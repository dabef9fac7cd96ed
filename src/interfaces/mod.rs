//! Adapters between the checkout flow and external data formats.

pub mod csv;
