//! Data core for a startup-funding analytics dashboard.
//!
//! The pipeline is three pure stages feeding presentation code that lives
//! outside this crate:
//!
//! 1. [`data::loader`] reads the source CSV once (memoized via
//!    [`data::loader::DatasetCache`]) and produces the canonical,
//!    immutable [`data::model::FundingDataset`].
//! 2. [`data::filter`] restricts the canonical table by the user's
//!    [`data::filter::FilterSelection`].
//! 3. [`analysis`] answers stateless aggregation queries over the filtered
//!    table, one or more per chart.
//!
//! [`session::Session`] ties the stages together for one user;
//! [`format::fmt_amount`] and [`export::export_csv`] are the shared output
//! utilities.

pub mod analysis;
pub mod data;
pub mod error;
pub mod export;
pub mod format;
pub mod session;

pub use data::filter::{apply_filters, FilterSelection, FilteredResult};
pub use data::loader::{load_csv, DatasetCache};
pub use data::model::{FundingCategory, FundingDataset, FundingRecord, FundingRound};
pub use error::DataError;
pub use export::export_csv;
pub use format::fmt_amount;
pub use session::Session;
