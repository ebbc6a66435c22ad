//! Macrotrack Journal
//!
//! In-memory, single-user collaborator for the analytics core: stores
//! daily macro and weight records with upsert semantics, resolves date
//! windows, and feeds sorted record sequences into the insight builders
//! from `macrotrack-shared`.

pub mod error;
pub mod journal;
pub mod window;

pub use error::JournalError;
pub use journal::{BulkUpsertSummary, Journal, UpsertAction};
pub use window::{DEFAULT_LOOKBACK_DAYS, DEFAULT_ROLLING_DAYS};
