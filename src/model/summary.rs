//! The category × week pivot table behind the dashboard.
//!
//! [`summarise_weekly`] is a pure function of its inputs: calling it twice
//! with the same transactions and weeks yields identical output. A requested
//! week with no matching transactions produces a column of zeros rather than
//! an error, since week selection is ordinary user input.

use crate::model::{Amount, Transaction, Week};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The header of the label column, matching the ledger file's column name.
pub const LABEL_COLUMN: &str = "categorisation";

/// The categorisation of the appended totals row.
pub const TOTAL_ROW: &str = "TOTAL";

/// One category row of a [`WeeklySummary`], with one cell per week column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    categorisation: String,
    cells: Vec<Amount>,
}

impl SummaryRow {
    pub fn categorisation(&self) -> &str {
        &self.categorisation
    }

    pub fn cells(&self) -> &[Amount] {
        &self.cells
    }
}

/// The pivoted weekly summary: one row per category, one column per
/// requested week, and a TOTAL row summing each column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummary {
    /// Week labels, in the order requested by the caller.
    columns: Vec<String>,
    /// One row per distinct categorisation, in first-encounter order.
    rows: Vec<SummaryRow>,
    /// Column-wise sums over `rows`.
    total: SummaryRow,
}

impl WeeklySummary {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn total(&self) -> &SummaryRow {
        &self.total
    }

    /// Looks up a single cell by categorisation and week label. Pass
    /// [`TOTAL_ROW`] to read from the totals row.
    pub fn cell(&self, categorisation: &str, week_label: &str) -> Option<Amount> {
        let col = self.columns.iter().position(|c| c == week_label)?;
        if categorisation == TOTAL_ROW {
            return self.total.cells.get(col).copied();
        }
        self.rows
            .iter()
            .find(|row| row.categorisation == categorisation)?
            .cells
            .get(col)
            .copied()
    }

    /// The sum of the TOTAL row across all columns.
    pub fn grand_total(&self) -> Amount {
        self.total.cells.iter().copied().sum()
    }

    /// Declares how each rendered column should be formatted: the label
    /// column as-is, every week column as a fixed two-decimal number.
    /// Consumed by the rendering layer only.
    pub fn display_columns(&self) -> Vec<ColumnSpec> {
        let mut specs = vec![ColumnSpec {
            name: LABEL_COLUMN.to_string(),
            kind: ColumnKind::Label,
            precision: None,
        }];
        specs.extend(self.columns.iter().map(|name| ColumnSpec {
            name: name.clone(),
            kind: ColumnKind::Numeric,
            precision: Some(2),
        }));
        specs
    }
}

/// Whether a rendered column holds labels or fixed-precision numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Label,
    Numeric,
}

serde_plain::derive_display_from_serialize!(ColumnKind);
serde_plain::derive_fromstr_from_deserialize!(ColumnKind);

/// Display metadata for one column of a rendered [`WeeklySummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
    pub precision: Option<u32>,
}

/// Groups `transactions` by (categorisation, week), sums amounts, and pivots
/// into a table restricted to the requested `weeks`.
///
/// Rows appear in the order their categorisation is first encountered in
/// `transactions`; columns appear in the order given by `weeks`. Cells with
/// no matching transactions are zero. Cells and totals are summed exactly,
/// then rescaled to two decimal places (half-to-even).
pub fn summarise_weekly(transactions: &[Transaction], weeks: &[Week]) -> WeeklySummary {
    let column_of: HashMap<Week, usize> = weeks
        .iter()
        .enumerate()
        .map(|(ix, week)| (*week, ix))
        .collect();

    let mut order: Vec<String> = Vec::new();
    let mut row_of: HashMap<String, usize> = HashMap::new();
    let mut cells: Vec<Vec<Amount>> = Vec::new();

    for transaction in transactions {
        let row = match row_of.get(transaction.categorisation()) {
            Some(&row) => row,
            None => {
                order.push(transaction.categorisation().to_string());
                cells.push(vec![Amount::ZERO; weeks.len()]);
                row_of.insert(transaction.categorisation().to_string(), cells.len() - 1);
                cells.len() - 1
            }
        };
        // Transactions outside the requested weeks are simply not counted.
        if let Some(&col) = column_of.get(&transaction.week()) {
            cells[row][col] += transaction.amount();
        }
    }

    let mut totals = vec![Amount::ZERO; weeks.len()];
    for row in &cells {
        for (col, amount) in row.iter().enumerate() {
            totals[col] += *amount;
        }
    }

    let rows = order
        .into_iter()
        .zip(cells)
        .map(|(categorisation, row)| SummaryRow {
            categorisation,
            cells: row.iter().map(Amount::rounded).collect(),
        })
        .collect();

    WeeklySummary {
        columns: weeks.iter().map(Week::label).collect(),
        rows,
        total: SummaryRow {
            categorisation: TOTAL_ROW.to_string(),
            cells: totals.iter().map(Amount::rounded).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::txn;

    fn week(label: &str) -> Week {
        label.parse().unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("01/01/2024", "Food", "10.00"),
            txn("03/01/2024", "Food", "5.50"),
            txn("08/01/2024", "Food", "2.00"),
        ]
    }

    #[test]
    fn test_two_week_food_scenario() {
        let weeks = [week("01/01/2024"), week("08/01/2024")];
        let summary = summarise_weekly(&sample(), &weeks);

        assert_eq!(summary.cell("Food", "01/01/2024").unwrap().to_string(), "15.50");
        assert_eq!(summary.cell("Food", "08/01/2024").unwrap().to_string(), "2.00");
        assert_eq!(summary.cell(TOTAL_ROW, "01/01/2024").unwrap().to_string(), "15.50");
        assert_eq!(summary.cell(TOTAL_ROW, "08/01/2024").unwrap().to_string(), "2.00");
        assert_eq!(summary.grand_total().to_string(), "17.50");
    }

    #[test]
    fn test_total_row_equals_column_sums() {
        let transactions = vec![
            txn("01/01/2024", "Food", "10.00"),
            txn("02/01/2024", "Rent", "500.00"),
            txn("09/01/2024", "Food", "-3.25"),
            txn("10/01/2024", "Transport", "12.80"),
        ];
        let weeks = [week("01/01/2024"), week("08/01/2024")];
        let summary = summarise_weekly(&transactions, &weeks);

        for label in summary.columns() {
            let column_sum: Amount = summary
                .rows()
                .iter()
                .map(|row| summary.cell(row.categorisation(), label).unwrap())
                .sum();
            assert_eq!(summary.cell(TOTAL_ROW, label).unwrap(), column_sum.rounded());
        }
    }

    #[test]
    fn test_unknown_week_yields_zero_column() {
        let weeks = [week("01/01/2024"), week("15/01/2024")];
        let summary = summarise_weekly(&sample(), &weeks);

        assert_eq!(summary.cell("Food", "15/01/2024").unwrap(), Amount::ZERO);
        assert_eq!(summary.cell(TOTAL_ROW, "15/01/2024").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_category_missing_from_week_yields_zero_not_omission() {
        let transactions = vec![
            txn("01/01/2024", "Food", "10.00"),
            txn("08/01/2024", "Rent", "500.00"),
        ];
        let weeks = [week("01/01/2024"), week("08/01/2024")];
        let summary = summarise_weekly(&transactions, &weeks);

        assert_eq!(summary.rows().len(), 2);
        assert_eq!(summary.cell("Food", "08/01/2024").unwrap(), Amount::ZERO);
        assert_eq!(summary.cell("Rent", "01/01/2024").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_empty_ledger_yields_total_row_only() {
        let weeks = [week("01/01/2024")];
        let summary = summarise_weekly(&[], &weeks);

        assert!(summary.rows().is_empty());
        assert_eq!(summary.cell(TOTAL_ROW, "01/01/2024").unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_rows_in_first_encounter_order() {
        let transactions = vec![
            txn("01/01/2024", "Rent", "500.00"),
            txn("02/01/2024", "Food", "10.00"),
            txn("03/01/2024", "Rent", "20.00"),
        ];
        let weeks = [week("01/01/2024")];
        let summary = summarise_weekly(&transactions, &weeks);

        let order: Vec<&str> = summary.rows().iter().map(SummaryRow::categorisation).collect();
        assert_eq!(order, vec!["Rent", "Food"]);
    }

    #[test]
    fn test_columns_preserve_caller_order() {
        let weeks = [week("08/01/2024"), week("01/01/2024")];
        let summary = summarise_weekly(&sample(), &weeks);
        assert_eq!(summary.columns(), ["08/01/2024", "01/01/2024"]);
    }

    #[test]
    fn test_idempotent() {
        let weeks = [week("01/01/2024"), week("08/01/2024")];
        let first = summarise_weekly(&sample(), &weeks);
        let second = summarise_weekly(&sample(), &weeks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_transactions_outside_requested_weeks_are_excluded() {
        let weeks = [week("01/01/2024")];
        let summary = summarise_weekly(&sample(), &weeks);
        // The 08/01 transaction is not in the requested subset.
        assert_eq!(summary.grand_total().to_string(), "15.50");
    }

    #[test]
    fn test_display_columns() {
        let weeks = [week("01/01/2024")];
        let summary = summarise_weekly(&sample(), &weeks);
        let specs = summary.display_columns();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name, LABEL_COLUMN);
        assert_eq!(specs[0].kind, ColumnKind::Label);
        assert_eq!(specs[1].name, "01/01/2024");
        assert_eq!(specs[1].kind, ColumnKind::Numeric);
        assert_eq!(specs[1].precision, Some(2));
    }
}
