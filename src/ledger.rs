//! The in-memory transaction table and its read-only queries.
//!
//! A [`Ledger`] is loaded exactly once at process start and never mutated.
//! Every query derives its result fresh from the table, so the ledger can be
//! shared across request handlers without locking.

use crate::model::{summarise_weekly, RawRecord, Transaction, Week, WeeklySummary};
use crate::Result;
use anyhow::Context;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// The immutable, in-memory transaction table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Loads the ledger file. Any malformed row fails the whole load; a
    /// partial dataset is never served.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Unable to open ledger file {}", path.display()))?;
        let ledger = Self::from_reader(file)
            .with_context(|| format!("Failed to load ledger file {}", path.display()))?;
        info!(
            "Loaded {} transactions from {}",
            ledger.transactions.len(),
            path.display()
        );
        Ok(ledger)
    }

    /// Parses CSV data with `date`, `categorisation` and `amount` columns.
    /// Row order is preserved.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut transactions = Vec::new();
        for (ix, result) in csv_reader.deserialize().enumerate() {
            // ix + 2: rows are 1-based and the header occupies row 1.
            let record: RawRecord =
                result.with_context(|| format!("Malformed row {}", ix + 2))?;
            let transaction = record
                .into_transaction()
                .with_context(|| format!("Malformed row {}", ix + 2))?;
            transactions.push(transaction);
        }
        Ok(Self { transactions })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The distinct weeks present in the data, most recent first. Stable
    /// across calls for the same ledger.
    pub fn weeks(&self) -> Vec<Week> {
        let distinct: BTreeSet<Week> = self.transactions.iter().map(Transaction::week).collect();
        distinct.into_iter().rev().collect()
    }

    /// The `count` most recent weeks present in the data.
    pub fn recent_weeks(&self, count: usize) -> Vec<Week> {
        let mut weeks = self.weeks();
        weeks.truncate(count);
        weeks
    }

    /// The distinct categorisation labels, in first-encounter order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.transactions
            .iter()
            .filter(|t| seen.insert(t.categorisation()))
            .map(|t| t.categorisation().to_string())
            .collect()
    }

    /// Returns the transactions matching `category` exactly (case-sensitive),
    /// or every transaction when no category is given. Zero matches is a
    /// valid, empty result.
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<&Transaction> {
        match category {
            None => self.transactions.iter().collect(),
            Some(cat) => self
                .transactions
                .iter()
                .filter(|t| t.categorisation() == cat)
                .collect(),
        }
    }

    /// Pivots the ledger into a category × week summary restricted to the
    /// given weeks. See [`summarise_weekly`].
    pub fn summarise(&self, weeks: &[Week]) -> WeeklySummary {
        summarise_weekly(&self.transactions, weeks)
    }
}
