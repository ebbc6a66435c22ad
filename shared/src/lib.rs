//! Macrotrack Shared Library
//!
//! Pure computation core for nutrition and weight analytics: domain
//! models, insight result types, the three insight builders, and input
//! validation. Everything here is side-effect free; a journal (or any
//! other collaborator) supplies range-filtered, day-ascending record
//! sequences and receives a fresh result structure per call.

pub mod insights;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use insights::{build_rolling_insight, build_weekly_insight, calorie_adjustment};
pub use models::{MacroRecord, MacroTarget, WeightRecord};
pub use types::*;
