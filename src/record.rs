//! Transaction record model and its columnar text rendering.

use crate::checksum::checksum;
use chrono::{DateTime, Utc};
use std::fmt;

/// Format used when rendering `created_at`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// A single drug transfer held by the ledger.
///
/// All fields are free text; nothing is validated. The checksum is computed
/// once at construction and stored alongside the fields it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Transaction identifier, also the ledger key.
    pub id: String,

    /// Identifier of the drug being transferred.
    pub drug_id: String,

    /// Party sending the drug.
    pub from: String,

    /// Party receiving the drug.
    pub to: String,

    /// Moment the record was created.
    pub created_at: DateTime<Utc>,

    /// 4-digit checksum over the fields above.
    pub checksum: String,
}

impl TransactionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(id: &str, drug_id: &str, from: &str, to: &str) -> Self {
        Self::with_timestamp(id, drug_id, from, to, Utc::now())
    }

    /// Creates a record with an explicit creation time.
    pub fn with_timestamp(
        id: &str,
        drug_id: &str,
        from: &str,
        to: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        TransactionRecord {
            id: id.to_string(),
            drug_id: drug_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            checksum: checksum(id, drug_id, from, to, &created_at),
            created_at,
        }
    }

    /// Recomputes the checksum from the stored fields.
    pub fn recompute_checksum(&self) -> String {
        checksum(&self.id, &self.drug_id, &self.from, &self.to, &self.created_at)
    }

    /// Returns `true` if the stored checksum matches the recomputed one.
    pub fn is_intact(&self) -> bool {
        self.checksum == self.recompute_checksum()
    }
}

/// Writes one row of the fixed-width transaction table.
///
/// Columns: id (15), drug id (10), from (15), to (15), timestamp (30),
/// checksum (10), left-justified and separated by single spaces.
pub fn write_row(f: &mut impl fmt::Write, cells: [&dyn fmt::Display; 6]) -> fmt::Result {
    let [id, drug_id, from, to, timestamp, checksum] = cells;
    write!(
        f,
        "{:<15} {:<10} {:<15} {:<15} {:<30} {:<10}",
        id, drug_id, from, to, timestamp, checksum
    )
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(
            f,
            [
                &self.id,
                &self.drug_id,
                &self.from,
                &self.to,
                &self.created_at.format(TIMESTAMP_FORMAT),
                &self.checksum,
            ],
        )
    }
}
