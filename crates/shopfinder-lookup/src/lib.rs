//! Shop lookup: turns a parsed product into nearby shop contacts.
//!
//! The client calls the search-shops edge function once and falls back to
//! generated mock shops on any failure. Successful lookups are recorded to a
//! [`HistorySink`] from a detached task.

pub mod client;
pub mod error;
pub mod history;
pub mod session;

pub use client::{build_search_query, ResultSource, ShopLookup, ShopLookupClient};
pub use error::{HistoryError, LookupError};
pub use history::{HistorySink, NoopHistorySink, PgHistorySink};
pub use session::{SearchOutcome, SearchSession};
