//! The `summary` and `weeks` commands.

use crate::args::SummaryArgs;
use crate::commands::Out;
use crate::model::{SummaryRow, Week, WeeklySummary, LABEL_COLUMN};
use crate::{Ledger, Result};
use anyhow::Context;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Builds the category × week summary table for the requested weeks.
pub fn summary(ledger: &Ledger, args: &SummaryArgs) -> Result<Out<WeeklySummary>> {
    let weeks = requested_weeks(ledger, args)?;
    let summary = ledger.summarise(&weeks);
    Ok(Out::new(render_summary(&summary), summary))
}

/// Lists the distinct week labels found in the ledger, most recent first.
pub fn weeks(ledger: &Ledger) -> Result<Out<Vec<String>>> {
    let labels: Vec<String> = ledger.weeks().iter().map(Week::label).collect();
    let message = if labels.is_empty() {
        "The ledger contains no transactions".to_string()
    } else {
        labels.join("\n")
    };
    Ok(Out::new(message, labels))
}

/// Explicit `--week` labels win over `--weeks`; an unparseable label is a
/// user error and reported as such. A parseable label absent from the data
/// is fine and yields a zero column.
fn requested_weeks(ledger: &Ledger, args: &SummaryArgs) -> Result<Vec<Week>> {
    if args.week().is_empty() {
        return Ok(ledger.recent_weeks(args.weeks()));
    }
    args.week()
        .iter()
        .map(|label| {
            label
                .parse::<Week>()
                .with_context(|| format!("Invalid week label '{label}', expected DD/MM/YYYY"))
        })
        .collect()
}

fn render_summary(summary: &WeeklySummary) -> String {
    let mut builder = Builder::default();

    let mut header = vec![LABEL_COLUMN.to_string()];
    header.extend(summary.columns().iter().cloned());
    builder.push_record(header);

    for row in summary.rows() {
        builder.push_record(render_row(row));
    }
    builder.push_record(render_row(summary.total()));

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

fn render_row(row: &SummaryRow) -> Vec<String> {
    let mut rendered = vec![row.categorisation().to_string()];
    rendered.extend(row.cells().iter().map(ToString::to_string));
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::sample_ledger;

    #[test]
    fn test_summary_defaults_to_recent_weeks() {
        let ledger = sample_ledger();
        let out = summary(&ledger, &SummaryArgs::new(5, vec![])).unwrap();
        let structure = out.structure().unwrap();
        assert_eq!(structure.columns(), ["08/01/2024", "01/01/2024"]);
    }

    #[test]
    fn test_summary_message_contains_total_row() {
        let ledger = sample_ledger();
        let out = summary(&ledger, &SummaryArgs::new(5, vec![])).unwrap();
        assert!(out.message().contains("TOTAL"));
        assert!(out.message().contains("15.50"));
    }

    #[test]
    fn test_summary_with_explicit_weeks_preserves_order() {
        let ledger = sample_ledger();
        let args = SummaryArgs::new(5, vec!["01/01/2024".into(), "08/01/2024".into()]);
        let out = summary(&ledger, &args).unwrap();
        assert_eq!(out.structure().unwrap().columns(), ["01/01/2024", "08/01/2024"]);
    }

    #[test]
    fn test_summary_with_absent_week_succeeds() {
        let ledger = sample_ledger();
        let args = SummaryArgs::new(5, vec!["15/01/2024".into()]);
        let out = summary(&ledger, &args).unwrap();
        assert_eq!(out.structure().unwrap().grand_total().to_string(), "0.00");
    }

    #[test]
    fn test_summary_with_bad_week_label_fails() {
        let ledger = sample_ledger();
        let args = SummaryArgs::new(5, vec!["January".into()]);
        let err = summary(&ledger, &args).unwrap_err();
        assert!(err.to_string().contains("January"));
    }

    #[test]
    fn test_weeks_lists_labels_descending() {
        let ledger = sample_ledger();
        let out = weeks(&ledger).unwrap();
        assert_eq!(out.structure().unwrap(), &vec!["08/01/2024", "01/01/2024"]);
    }

    #[test]
    fn test_weeks_empty_ledger() {
        let ledger = Ledger::default();
        let out = weeks(&ledger).unwrap();
        assert!(out.structure().unwrap().is_empty());
        assert!(out.message().contains("no transactions"));
    }
}
