//! Shopping cart.
//!
//! Line items are kept in memory and written through to the local cache on
//! every change, keyed by the active identity.

mod aggregate;
mod line_item;
mod notice;

pub use aggregate::CartAggregate;
pub use line_item::{CartTotals, LineItem, MAX_LINE_QUANTITY};
pub use notice::{CartNotice, NoticeKind, Notifier, RecordingNotifier, TracingNotifier};
