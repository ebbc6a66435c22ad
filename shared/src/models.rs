//! Data models for the Macrotrack core
//!
//! Records are supplied to the insight builders already filtered to a date
//! window, sorted ascending by day, with at most one entry per day. The
//! builders read them and never mutate, sort, or deduplicate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of logged macros
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRecord {
    pub day: NaiveDate,
    pub calories: i32,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// One day's weigh-in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub day: NaiveDate,
    pub weight_lbs: f64,
}

/// Daily macro targets (at most one active per user)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    pub calories_target: i32,
    pub protein_target_g: f64,
    pub carbs_target_g: f64,
    pub fat_target_g: f64,
}
