//! # Pharma Ledger
//!
//! An interactive, in-memory ledger of pharmaceutical drug transfers.
//!
//! ## Design Principles
//!
//! - **Single owned store**: one [`Ledger`] value, borrowed by the [`Shell`]
//! - **Stable enumeration**: genesis first, then ids in first-insertion order
//! - **Display checksum**: a 4-digit digest per record, not a security control
//! - **No persistence**: all state is discarded when the session ends
//!
//! ## Example
//!
//! ```
//! use pharma_ledger::{Ledger, ValidationResult};
//!
//! let mut ledger = Ledger::new();
//! ledger.insert("T1", "D1", "Acme", "Clinic");
//! assert_eq!(ledger.list().count(), 2);
//! assert_eq!(ledger.validate_all(), ValidationResult::Valid);
//! ```

pub mod checksum;
pub mod error;
pub mod record;
pub mod shell;
pub mod store;

pub use checksum::checksum;
pub use error::{LedgerError, Result};
pub use record::TransactionRecord;
pub use shell::{MenuChoice, Shell};
pub use store::{Ledger, ValidationResult};
