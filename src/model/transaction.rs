//! The transaction record and its raw CSV shape.

use crate::model::{Amount, Week};
use crate::Result;
use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The expected format of the `date` column in the ledger file.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A single row from the ledger file. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    #[serde(serialize_with = "serialize_date")]
    date: NaiveDate,
    categorisation: String,
    amount: Amount,
}

impl Transaction {
    pub fn new(date: NaiveDate, categorisation: impl Into<String>, amount: Amount) -> Self {
        Self {
            date,
            categorisation: categorisation.into(),
            amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn categorisation(&self) -> &str {
        &self.categorisation
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The calendar week this transaction falls into.
    pub fn week(&self) -> Week {
        Week::containing(self.date)
    }
}

/// Serializes a date in the same DD/MM/YYYY format it was loaded from.
fn serialize_date<S>(date: &NaiveDate, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
}

/// A ledger row exactly as it appears in the CSV file, before the date and
/// amount fields have been parsed. Columns beyond the three named here are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRecord {
    date: String,
    categorisation: String,
    amount: String,
}

impl RawRecord {
    pub(crate) fn into_transaction(self) -> Result<Transaction> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .with_context(|| format!("Invalid date '{}', expected DD/MM/YYYY", self.date))?;
        let amount = Amount::from_str(&self.amount)
            .with_context(|| format!("Invalid amount '{}'", self.amount))?;
        Ok(Transaction {
            date,
            categorisation: self.categorisation,
            amount,
        })
    }
}
