//! Pharma Ledger CLI
//!
//! Runs the interactive menu over stdin/stdout. No arguments are read.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use pharma_ledger::{Ledger, Result, Shell};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut ledger = Ledger::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut ledger, stdin.lock(), stdout.lock()).run()
}
