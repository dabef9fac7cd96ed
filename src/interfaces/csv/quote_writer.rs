use crate::application::checkout::FeeQuote;
use crate::error::Result;
use std::io::Write;

/// Writes fee quotes as CSV with a `method,amount,fee` header.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_quote(&mut self, quote: &FeeQuote) -> Result<()> {
        self.writer.serialize(quote)?;
        Ok(())
    }

    /// Writes every quote and flushes the underlying sink.
    pub fn write_quotes<'a>(
        &mut self,
        quotes: impl IntoIterator<Item = &'a FeeQuote>,
    ) -> Result<()> {
        for quote in quotes {
            self.write_quote(quote)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(method: &str, amount: f64, fee: f64) -> FeeQuote {
        FeeQuote {
            method: method.to_string(),
            amount,
            fee,
        }
    }

    #[test]
    fn test_writes_header_and_rows() {
        let quotes = [
            quote("creditcard", 100.0, 2.0),
            quote("banktransfer", 5.5, 2.0),
        ];
        let mut out = Vec::new();
        {
            let mut writer = QuoteWriter::new(&mut out);
            writer.write_quotes(&quotes).unwrap();
        }

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "method,amount,fee\ncreditcard,100.0,2.0\nbanktransfer,5.5,2.0\n"
        );
    }

    #[test]
    fn test_no_quotes_writes_nothing() {
        let mut out = Vec::new();
        {
            let mut writer = QuoteWriter::new(&mut out);
            writer.write_quotes(std::iter::empty()).unwrap();
        }
        assert!(out.is_empty());
    }
}
