//! Types that represent the core data model, such as `Transaction`, `Week`
//! and the pivoted `WeeklySummary`.
mod amount;
mod summary;
mod transaction;
mod week;

pub use amount::Amount;
pub use summary::{summarise_weekly, ColumnKind, ColumnSpec, SummaryRow, WeeklySummary};
pub use summary::{LABEL_COLUMN, TOTAL_ROW};
pub use transaction::{Transaction, DATE_FORMAT};
pub(crate) use transaction::RawRecord;
pub use week::{Week, WEEK_LABEL_FORMAT};
