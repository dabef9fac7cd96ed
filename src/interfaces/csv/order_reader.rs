use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One checkout request read from CSV.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Order {
    /// Payment method name, resolved case-insensitively at checkout.
    pub method: String,
    pub amount: f64,
}

/// Reads orders from a CSV source with a `method, amount` header.
///
/// Whitespace around fields is trimmed. A malformed row yields an error item
/// without ending the iteration.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "method, amount\ncreditcard, 100\nPayPal, 12.5";
        let reader = OrderReader::new(data.as_bytes());
        let results: Vec<Result<Order>> = reader.orders().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.method, "creditcard");
        assert_eq!(first.amount, 100.0);
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.method, "PayPal");
        assert_eq!(second.amount, 12.5);
    }

    #[test]
    fn test_reader_malformed_amount() {
        let data = "method, amount\npaypal, lots\nbanktransfer, 1.0";
        let reader = OrderReader::new(data.as_bytes());
        let results: Vec<Result<Order>> = reader.orders().collect();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(PaymentError::CsvError(_))));
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_reader_missing_amount() {
        let data = "method, amount\npaypal";
        let reader = OrderReader::new(data.as_bytes());
        let results: Vec<Result<Order>> = reader.orders().collect();

        assert!(results[0].is_err());
    }
}
