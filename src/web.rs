//! Axum routes and HTML rendering for the dashboard.
//!
//! Presentation glue only: every handler is a read-only query against the
//! shared [`Ledger`], and all business rules live in the model. A bad user
//! selection (an unknown week or category) degrades to an empty or zero
//! table; it never produces an error page.

use crate::model::{ColumnKind, Transaction, Week, WeeklySummary};
use crate::Ledger;
use axum::extract::{Query, State};
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::fmt::Write;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// How many of the most recent weeks the headline summary shows.
const HEADLINE_WEEKS: usize = 5;

pub(crate) fn router(ledger: Arc<Ledger>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/weeks", get(api_weeks))
        .route("/api/summary", get(api_summary))
        .route("/api/transactions", get(api_transactions))
        .layer(TraceLayer::new_for_http())
        .with_state(ledger)
}

/// The user's current dropdown selections, carried as query parameters.
#[derive(Debug, Default, Clone, Deserialize)]
struct Selection {
    week: Option<String>,
    category: Option<String>,
}

impl Selection {
    /// The selected week, if it parses. The "all recent weeks" default is
    /// applied by the caller.
    fn week(&self) -> Option<Week> {
        self.week.as_deref().and_then(|label| label.parse().ok())
    }

    /// The selected category. An empty value means "All".
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

async fn index(
    State(ledger): State<Arc<Ledger>>,
    Query(selection): Query<Selection>,
) -> Html<String> {
    Html(render_page(&ledger, &selection))
}

async fn api_weeks(State(ledger): State<Arc<Ledger>>) -> Json<Vec<String>> {
    Json(ledger.weeks().iter().map(Week::label).collect())
}

async fn api_summary(
    State(ledger): State<Arc<Ledger>>,
    Query(selection): Query<Selection>,
) -> Json<WeeklySummary> {
    let weeks = match selection.week() {
        Some(week) => vec![week],
        None => ledger.recent_weeks(HEADLINE_WEEKS),
    };
    Json(ledger.summarise(&weeks))
}

async fn api_transactions(
    State(ledger): State<Arc<Ledger>>,
    Query(selection): Query<Selection>,
) -> Json<Vec<Transaction>> {
    Json(
        ledger
            .filter_by_category(selection.category())
            .into_iter()
            .cloned()
            .collect(),
    )
}

fn render_page(ledger: &Ledger, selection: &Selection) -> String {
    let weeks = ledger.weeks();
    let headline = ledger.summarise(&ledger.recent_weeks(HEADLINE_WEEKS));

    // An unknown or missing week selection falls back to the most recent
    // week, like the dashboard's dropdown default.
    let selected_week = selection.week().or_else(|| weeks.first().copied());
    let week_summary = selected_week.map(|week| ledger.summarise(&[week]));

    let selected_category = selection.category();
    let matched = ledger.filter_by_category(selected_category);

    let mut page = String::new();
    page.push_str(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Weekly sums</title>\n<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; margin: 1em 0; }\n\
         th, td { border: 1px solid #ccc; padding: 0.3em 0.8em; }\n\
         td.num { text-align: right; }\n\
         tr:last-child { font-weight: bold; }\n\
         </style>\n</head>\n<body>\n",
    );

    page.push_str("<h1>Weekly sums</h1>\n");
    page.push_str(&summary_table(&headline));

    page.push_str("<h1>Specific week</h1>\n");
    let _ = write!(
        page,
        "<form method=\"get\">\n<select name=\"week\" onchange=\"this.form.submit()\">\n{}</select>\n{}</form>\n",
        week_options(&weeks, selected_week),
        hidden_input("category", selection.category.as_deref()),
    );
    if let Some(summary) = &week_summary {
        page.push_str(&summary_table(summary));
    }

    page.push_str("<h1>Transactions</h1>\n");
    let _ = write!(
        page,
        "<form method=\"get\">\n<select name=\"category\" onchange=\"this.form.submit()\">\n{}</select>\n{}</form>\n",
        category_options(&ledger.categories(), selected_category),
        hidden_input("week", selection.week.as_deref()),
    );
    page.push_str(&transactions_table(&matched));

    page.push_str("</body>\n</html>\n");
    page
}

fn summary_table(summary: &WeeklySummary) -> String {
    let specs = summary.display_columns();

    let mut html = String::from("<table>\n<tr>");
    for spec in &specs {
        let _ = write!(html, "<th>{}</th>", escape(&spec.name));
    }
    html.push_str("</tr>\n");

    for row in summary.rows().iter().chain(std::iter::once(summary.total())) {
        html.push_str("<tr>");
        let _ = write!(html, "<td>{}</td>", escape(row.categorisation()));
        for (cell, spec) in row.cells().iter().zip(specs.iter().skip(1)) {
            debug_assert_eq!(spec.kind, ColumnKind::Numeric);
            let _ = write!(html, "<td class=\"num\">{cell}</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n");
    html
}

fn transactions_table(transactions: &[&Transaction]) -> String {
    let mut html =
        String::from("<table>\n<tr><th>date</th><th>categorisation</th><th>amount</th></tr>\n");
    for transaction in transactions {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>\n",
            transaction.date().format(crate::model::DATE_FORMAT),
            escape(transaction.categorisation()),
            transaction.amount(),
        );
    }
    html.push_str("</table>\n");
    html
}

fn week_options(weeks: &[Week], selected: Option<Week>) -> String {
    let mut html = String::new();
    for week in weeks {
        let _ = writeln!(
            html,
            "<option value=\"{label}\"{sel}>{label}</option>",
            label = week.label(),
            sel = if Some(*week) == selected { " selected" } else { "" },
        );
    }
    html
}

fn category_options(categories: &[String], selected: Option<&str>) -> String {
    let mut html = String::from("<option value=\"\">All</option>\n");
    for category in categories {
        let _ = writeln!(
            html,
            "<option value=\"{value}\"{sel}>{value}</option>",
            value = escape(category),
            sel = if Some(category.as_str()) == selected { " selected" } else { "" },
        );
    }
    html
}

/// Keeps the other dropdown's selection when one form is submitted.
fn hidden_input(name: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!(
            "<input type=\"hidden\" name=\"{name}\" value=\"{}\">\n",
            escape(value)
        ),
        None => String::new(),
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{mixed_ledger, sample_ledger};

    #[test]
    fn test_page_contains_all_sections() {
        let page = render_page(&sample_ledger(), &Selection::default());
        assert!(page.contains("<h1>Weekly sums</h1>"));
        assert!(page.contains("<h1>Specific week</h1>"));
        assert!(page.contains("<h1>Transactions</h1>"));
        assert!(page.contains("TOTAL"));
    }

    #[test]
    fn test_page_defaults_to_most_recent_week() {
        let page = render_page(&sample_ledger(), &Selection::default());
        assert!(page.contains("<option value=\"08/01/2024\" selected>"));
    }

    #[test]
    fn test_page_with_unknown_week_still_renders() {
        let selection = Selection {
            week: Some("not a date".into()),
            category: None,
        };
        let page = render_page(&sample_ledger(), &selection);
        assert!(page.contains("TOTAL"));
    }

    #[test]
    fn test_page_with_category_selection_filters_rows() {
        let selection = Selection {
            week: None,
            category: Some("Rent".into()),
        };
        let page = render_page(&mixed_ledger(), &selection);
        assert!(page.contains("<option value=\"Rent\" selected>"));
        // The transactions table shows only Rent rows, one data row here.
        assert!(!transactions_table(&mixed_ledger().filter_by_category(Some("Rent")))
            .contains("Food"));
    }

    #[test]
    fn test_empty_ledger_renders_without_panicking() {
        let page = render_page(&Ledger::default(), &Selection::default());
        assert!(page.contains("<h1>Weekly sums</h1>"));
    }

    #[test]
    fn test_summary_table_has_numeric_cells() {
        let ledger = sample_ledger();
        let html = summary_table(&ledger.summarise(&ledger.recent_weeks(2)));
        assert!(html.contains("<td class=\"num\">15.50</td>"));
        assert!(html.contains("<th>categorisation</th>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
