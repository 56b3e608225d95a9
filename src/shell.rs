//! Interactive menu shell.
//!
//! Reads one line per prompt from any `BufRead`, dispatches to the
//! [`Ledger`], and writes human-readable results to any `Write`.

use crate::error::Result;
use crate::record::write_row;
use crate::store::{Ledger, ValidationResult};
use log::{info, warn};
use std::io::{BufRead, Write};

const MENU: &str = "\nPharma Supply Chain Management System:\n\
1. Add Transaction\n\
2. View Transactions\n\
3. Remove Transaction\n\
4. Validate Ledger\n\
5. Exit\n";

/// Width of the dashed line under the table header.
const SEPARATOR_WIDTH: usize = 103;

/// A selection at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: record a new transfer.
    Add,

    /// `2`: print the transaction table.
    View,

    /// `3`: remove a transfer by id.
    Remove,

    /// `4`: recheck stored checksums.
    Validate,

    /// `5`: end the session.
    Exit,

    /// Anything other than `1` to `5`, including non-numeric text.
    Invalid,
}

impl MenuChoice {
    /// Parses a menu line. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        match line.trim().parse::<u32>() {
            Ok(1) => MenuChoice::Add,
            Ok(2) => MenuChoice::View,
            Ok(3) => MenuChoice::Remove,
            Ok(4) => MenuChoice::Validate,
            Ok(5) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The read-eval-print loop over a borrowed ledger.
pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell operating on `ledger`.
    pub fn new(ledger: &'a mut Ledger, input: R, output: W) -> Self {
        Shell {
            ledger,
            input,
            output,
        }
    }

    /// Runs until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started with {} record(s)", self.ledger.len());

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Select an option: ")? else {
                break;
            };

            if self.dispatch(MenuChoice::parse(&line))? == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        info!("Session ended with {} record(s)", self.ledger.len());
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => return self.add_transaction(),
            MenuChoice::View => self.view_transactions()?,
            MenuChoice::Remove => return self.remove_transaction(),
            MenuChoice::Validate => self.validate_ledger()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(Flow::Quit);
            }
            MenuChoice::Invalid => {
                warn!("Invalid menu selection");
                writeln!(self.output, "Invalid option. Please try again.")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn add_transaction(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Enter Transaction ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(drug_id) = self.prompt("Enter Drug ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(from) = self.prompt("Enter From: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(to) = self.prompt("Enter To: ")? else {
            return Ok(Flow::Quit);
        };

        let record = self.ledger.insert(&id, &drug_id, &from, &to);
        writeln!(self.output, "Transaction added: {}", record)?;
        Ok(Flow::Continue)
    }

    fn view_transactions(&mut self) -> Result<()> {
        let mut header = String::new();
        write_row(
            &mut header,
            [&"Transaction ID", &"Drug ID", &"From", &"To", &"Timestamp", &"Checksum"],
        )?;

        writeln!(self.output, "{}", header)?;
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for record in self.ledger.list() {
            writeln!(self.output, "{}", record)?;
        }

        Ok(())
    }

    fn remove_transaction(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt("Enter Transaction ID to remove: ")? else {
            return Ok(Flow::Quit);
        };

        if self.ledger.remove(&id) {
            writeln!(self.output, "Transaction with ID {} removed.", id)?;
        } else {
            writeln!(self.output, "Transaction ID not found.")?;
        }

        Ok(Flow::Continue)
    }

    fn validate_ledger(&mut self) -> Result<()> {
        match self.ledger.validate_all() {
            ValidationResult::Valid => writeln!(self.output, "Ledger is valid.")?,
            ValidationResult::Mismatch(index) => writeln!(
                self.output,
                "Transaction checksum mismatch at index {}",
                index
            )?,
        }

        Ok(())
    }

    /// Writes `text` and reads one line.
    ///
    /// Returns `None` at end of input. Only the line terminator is stripped.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}
