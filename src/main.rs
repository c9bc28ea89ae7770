//! Shipping Discounts CLI
//!
//! Reads shipment transactions, one per line, and prints each line with
//! its price and discount.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.txt > output.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use shipping_discounts::{process_lines, Result, RunOptions};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "shipping-discounts", version, about = "Price shipments and apply monthly discounts")]
struct Cli {
    /// Transactions file, one `YYYY-MM-DD SIZE PROVIDER` record per line
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Append "Ignored" to lines that could not be parsed
    #[arg(long)]
    mark_ignored: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file = File::open(&cli.input)?;
    let reader = BufReader::new(file);

    let options = RunOptions {
        mark_ignored: cli.mark_ignored,
    };

    let stdout = io::stdout();
    let handle = stdout.lock();
    process_lines(reader, handle, &options)?;

    Ok(())
}
