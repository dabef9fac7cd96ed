use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paystrat::application::checkout::{CheckoutService, FeeQuote, checkout};
use paystrat::application::factory::PaymentCreator;
use paystrat::application::registry::StrategyRegistry;
use paystrat::config::FeeSchedule;
use paystrat::interfaces::csv::order_reader::OrderReader;
use paystrat::interfaces::csv::quote_writer::QuoteWriter;
use paystrat::logging::init_logging;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment method: creditcard, paypal or banktransfer (case-insensitive)
    #[arg(required_unless_present = "input")]
    method: Option<String>,

    /// Transaction amount
    #[arg(default_value_t = 100.0)]
    amount: f64,

    /// Orders CSV file (`method, amount`) to quote in batch
    #[arg(long, conflicts_with = "method")]
    input: Option<PathBuf>,

    /// TOML file overriding the default fee schedule
    #[arg(long)]
    fees: Option<PathBuf>,

    /// Write batch quotes as JSON lines instead of CSV
    #[arg(long, requires = "input")]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let fees = match &cli.fees {
        Some(path) => FeeSchedule::from_file(path).into_diagnostic()?,
        None => FeeSchedule::default(),
    };

    if let Some(input) = cli.input {
        return run_batch(&input, fees, cli.json);
    }

    let method = cli
        .method
        .ok_or_else(|| miette::miette!("a payment method is required"))?;
    run_single(&method, cli.amount, fees)
}

fn run_single(method: &str, amount: f64, fees: FeeSchedule) -> Result<()> {
    let service = CheckoutService::new(PaymentCreator::new(fees));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let quote = service
        .checkout_by_name(method, amount, &mut out)
        .into_diagnostic()?;
    writeln!(out, "Transaction fee: {:.2}", quote.fee).into_diagnostic()?;

    Ok(())
}

fn run_batch(input: &Path, fees: FeeSchedule, json: bool) -> Result<()> {
    let registry = StrategyRegistry::with_builtin(fees);

    // Status lines go to stderr; stdout carries only the quotes
    let file = File::open(input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    let mut quotes: Vec<FeeQuote> = Vec::new();
    for (index, order) in reader.orders().enumerate() {
        let result = order.and_then(|order| {
            let strategy = registry.resolve(&order.method)?;
            checkout(strategy.as_ref(), order.amount, &mut io::stderr())
        });
        match result {
            Ok(quote) => quotes.push(quote),
            Err(e) => {
                eprintln!("Error processing order {}: {}", index + 1, e);
            }
        }
    }

    let stdout = io::stdout();
    if json {
        let mut out = stdout.lock();
        for quote in &quotes {
            serde_json::to_writer(&mut out, quote).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    } else {
        let mut writer = QuoteWriter::new(stdout.lock());
        writer.write_quotes(&quotes).into_diagnostic()?;
    }

    Ok(())
}
