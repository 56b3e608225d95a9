//! In-memory record store.
//!
//! Holds every transaction record keyed by id. Enumeration order is stable
//! within a run: the genesis record first, then ids in the order they were
//! first inserted.

use crate::record::TransactionRecord;
use log::{debug, warn};
use std::collections::HashMap;

/// Id of the seed record present in every new ledger.
pub const GENESIS_ID: &str = "0";

/// Drug id of the seed record.
pub const GENESIS_DRUG_ID: &str = "0";

/// Sending party of the seed record.
pub const GENESIS_FROM: &str = "Genesis";

/// Receiving party of the seed record.
pub const GENESIS_TO: &str = "Pharma";

/// Outcome of [`Ledger::validate_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every checked record matches its stored checksum.
    Valid,

    /// 1-based position, within the checked records, of the first mismatch.
    Mismatch(usize),
}

/// The ledger of drug transfers.
///
/// # Overwrites
///
/// Ids are not required to be unique. Inserting an id that is already present
/// replaces the stored record; the id keeps its original enumeration position.
#[derive(Debug)]
pub struct Ledger {
    /// Records indexed by transaction id.
    records: HashMap<String, TransactionRecord>,

    /// Ids in enumeration order.
    order: Vec<String>,
}

impl Ledger {
    /// Creates a ledger holding only the genesis record.
    pub fn new() -> Self {
        let mut ledger = Ledger {
            records: HashMap::new(),
            order: Vec::new(),
        };
        ledger.store(TransactionRecord::new(
            GENESIS_ID,
            GENESIS_DRUG_ID,
            GENESIS_FROM,
            GENESIS_TO,
        ));
        ledger
    }

    /// Records a transfer stamped with the current time.
    ///
    /// Any existing record under `id` is replaced. Returns the stored record.
    pub fn insert(&mut self, id: &str, drug_id: &str, from: &str, to: &str) -> &TransactionRecord {
        self.store(TransactionRecord::new(id, drug_id, from, to))
    }

    /// Removes the record under `id`.
    ///
    /// Returns `false` if no such record exists; the ledger is left unchanged.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.records.remove(id).is_none() {
            debug!("Remove of unknown transaction {:?} ignored", id);
            return false;
        }

        self.order.retain(|existing| existing != id);
        debug!("Removed transaction {:?}", id);
        true
    }

    /// Iterates over all records in enumeration order.
    pub fn list(&self) -> impl Iterator<Item = &TransactionRecord> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Returns the record stored under `id`, if any.
    pub fn get(&self, id: &str) -> Option<&TransactionRecord> {
        self.records.get(id)
    }

    /// Returns `true` if a record is stored under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of stored records, genesis included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recomputes each record's checksum and compares it with the stored one.
    ///
    /// The first record in enumeration order is treated as the anchor and is
    /// not checked. Since a checksum depends only on its own record's
    /// immutable fields, records built through [`Ledger::insert`] always pass.
    pub fn validate_all(&self) -> ValidationResult {
        for (index, record) in self.list().enumerate().skip(1) {
            if !record.is_intact() {
                warn!(
                    "Checksum mismatch for transaction {:?}: stored {}, computed {}",
                    record.id,
                    record.checksum,
                    record.recompute_checksum()
                );
                return ValidationResult::Mismatch(index);
            }
        }

        ValidationResult::Valid
    }

    /// Stores a record under its own id, replacing any previous one.
    fn store(&mut self, record: TransactionRecord) -> &TransactionRecord {
        let id = record.id.clone();

        if self.records.insert(id.clone(), record).is_some() {
            debug!("Overwrote existing transaction {:?}", id);
        } else {
            debug!("Inserted transaction {:?}", id);
            self.order.push(id.clone());
        }

        &self.records[&id]
    }

    /// Returns a mutable reference to a record (for testing).
    #[cfg(test)]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut TransactionRecord> {
        self.records.get_mut(id)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
