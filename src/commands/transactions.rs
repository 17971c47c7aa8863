//! The `transactions` command: the raw table, optionally filtered.

use crate::args::TransactionsArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::{Ledger, Result};
use tabled::builder::Builder;
use tabled::settings::Style;

pub fn transactions(ledger: &Ledger, args: &TransactionsArgs) -> Result<Out<Vec<Transaction>>> {
    let matched = ledger.filter_by_category(args.category());

    let message = match (matched.is_empty(), args.category()) {
        (true, Some(category)) => {
            format!("No transactions with categorisation '{category}'")
        }
        (true, None) => "The ledger contains no transactions".to_string(),
        (false, _) => render_transactions(&matched),
    };

    Ok(Out::new(message, matched.into_iter().cloned().collect()))
}

fn render_transactions(transactions: &[&Transaction]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["date", "categorisation", "amount"]);
    for transaction in transactions {
        builder.push_record([
            transaction.date().format(crate::model::DATE_FORMAT).to_string(),
            transaction.categorisation().to_string(),
            transaction.amount().to_string(),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{mixed_ledger, sample_ledger};

    #[test]
    fn test_unfiltered_returns_all_rows() {
        let ledger = sample_ledger();
        let out = transactions(&ledger, &TransactionsArgs::new(None)).unwrap();
        assert_eq!(out.structure().unwrap().len(), 3);
        assert!(out.message().contains("01/01/2024"));
    }

    #[test]
    fn test_filtered_returns_matches_only() {
        let ledger = mixed_ledger();
        let out = transactions(&ledger, &TransactionsArgs::new(Some("Food".into()))).unwrap();
        let rows = out.structure().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|t| t.categorisation() == "Food"));
    }

    #[test]
    fn test_no_match_reports_empty_result() {
        let ledger = sample_ledger();
        let out = transactions(&ledger, &TransactionsArgs::new(Some("Yachts".into()))).unwrap();
        assert!(out.structure().unwrap().is_empty());
        assert!(out.message().contains("Yachts"));
    }
}
