//! Insight result types
//!
//! Nested structures returned by the insight builders. Every quantity that
//! cannot be computed from the supplied records is an explicit `None`,
//! never a substituted zero, so consumers can tell "computed zero" apart
//! from "not computable".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MacroRecord, MacroTarget, WeightRecord};

/// Inclusive date range covered by an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

// ============================================================================
// Weekly Insight
// ============================================================================

/// Seven-day adherence and macro summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInsight {
    pub week_start: NaiveDate,
    pub week_end_exclusive: NaiveDate,
    /// Share of the 7 days with a logged macro record, as a percentage
    pub adherence_percent: f64,
    pub macros: WeeklyMacroSummary,
    pub weight: WeeklyWeightSummary,
    /// Echo of the active target, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<MacroTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs_targets: Option<TargetComparison>,
}

/// Macro averages, totals, and raw rows for the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMacroSummary {
    pub days_logged: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_protein_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_carbs_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_fat_g: Option<f64>,
    pub daily_macros: Vec<MacroRecord>,
    pub totals: MacroTotals,
}

/// Plain sums over logged days (zero when nothing was logged)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub total_calories: i64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
}

/// Weight change over the week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWeightSummary {
    pub entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_weight_lbs: Option<f64>,
    /// Only present with at least two weigh-ins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_weight_lbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_lbs: Option<f64>,
    pub daily_weights: Vec<WeightRecord>,
}

/// Deltas against the target, as averages and as totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetComparison {
    pub avg: TargetDeltas,
    pub total_over_logged_days: TargetDeltas,
}

/// Per-metric difference from target (metric minus target)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDeltas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_delta_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_delta_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_delta_g: Option<f64>,
}

// ============================================================================
// Rolling Insight
// ============================================================================

/// Coarse averages and weight trend over an N-day window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingInsight {
    pub window_days: u32,
    pub range: DateRange,
    pub macros: RollingMacroSummary,
    pub weight: RollingWeightSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingMacroSummary {
    pub days_logged: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_protein_g: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingWeightSummary {
    pub entries: usize,
    /// Last minus first weigh-in; `None` with fewer than two entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_lbs: Option<f64>,
    /// `Flat` covers both an exactly-zero trend and an undefined one;
    /// `trend_lbs` being `None` is what distinguishes the latter
    pub direction: TrendDirection,
}

/// Direction of the two-point weight trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Flat => "flat",
        }
    }
}

// ============================================================================
// Calorie Adjustment
// ============================================================================

/// Calorie-adjustment recommendation against a desired rate of change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieAdjustment {
    pub window_days_requested: u32,
    pub range: DateRange,
    pub status: AdjustmentStatus,
    pub confidence: Confidence,
    pub macros: MacroAverages,
    pub weight: TrendEstimate,
    pub recommendation: Recommendation,
    /// Methodology notes, informational only
    pub notes: Vec<String>,
    /// Non-fatal data-quality warnings
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAverages {
    pub days_logged: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_protein_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_carbs_g: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_fat_g: Option<f64>,
}

/// Two-point weight trend and weekly rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    pub entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_weight_lbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_weight_lbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_lbs: Option<f64>,
    /// Calendar days between first and last weigh-in, not entry count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rate_lbs_per_week: Option<f64>,
    pub desired_rate_lbs_per_week: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_rate_lbs_per_week: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Safety-capped adjustment, rounded to the nearest 5 kcal/day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calorie_adjustment_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncapped_calorie_adjustment_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_daily_calories: Option<f64>,
}

/// How the observed rate compares to the desired rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentStatus {
    OnTrack,
    IncreaseCalories,
    DecreaseCalories,
    InsufficientData,
}

impl AdjustmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentStatus::OnTrack => "on_track",
            AdjustmentStatus::IncreaseCalories => "increase_calories",
            AdjustmentStatus::DecreaseCalories => "decrease_calories",
            AdjustmentStatus::InsufficientData => "insufficient_data",
        }
    }
}

/// Trend reliability, from actual data density rather than window length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}
