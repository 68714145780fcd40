//! NACHA Generator CLI
//!
//! Builds one ACH file from a company-settings JSON document and a
//! pending-entries CSV, writing the artifact into an output directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- company.json entries.csv out/
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use nacha_generator::{FsStore, GenerationRun, GeneratorError, Result};
use std::env;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err(GeneratorError::MissingArgument);
    }

    let mut store = FsStore::new(&args[1], &args[2], &args[3]);
    let mut generation = GenerationRun::new();
    let file = generation.execute(&mut store)?;

    println!("file: {}", file.file_name);
    println!("entries: {}", file.summary.total_entries);
    println!("credit total: {}", file.summary.total_credit_amount);
    println!("debit total: {}", file.summary.total_debit_amount);
    println!("entry hash: {}", file.summary.entry_hash);
    println!("effective date: {}", file.summary.effective_date);

    Ok(())
}
