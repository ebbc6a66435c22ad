//! Nutrition insight calculations
//!
//! Transforms raw daily macro and weight records into derived analytics:
//! weekly adherence summaries, rolling-window trend summaries, and a
//! calorie-adjustment recommendation.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All builders are pure, no side effects
//! 2. **Explicit Absence**: Anything that cannot be computed is `None`,
//!    never a substituted zero
//! 3. **Caller-Owned Invariants**: Inputs are already range-filtered,
//!    day-ascending, one record per day; the builders do not re-sort
//! 4. **Late Rounding**: Sums and averages are computed on raw values and
//!    rounded only when the result structure is assembled

use chrono::{Duration, NaiveDate};

use crate::models::{MacroRecord, MacroTarget, WeightRecord};
use crate::types::{
    AdjustmentStatus, CalorieAdjustment, Confidence, DateRange, MacroAverages, MacroTotals,
    Recommendation, RollingInsight, RollingMacroSummary, RollingWeightSummary, TargetComparison,
    TargetDeltas, TrendDirection, TrendEstimate, WeeklyInsight, WeeklyMacroSummary,
    WeeklyWeightSummary,
};

/// Modeling assumption: kcal per pound of body weight
const KCAL_PER_LB: f64 = 3500.0;

/// Safety cap on the recommended daily calorie adjustment (kcal/day)
const ADJUSTMENT_CAP_KCAL: f64 = 250.0;

/// Tighter cap applied under low confidence (kcal/day)
const LOW_CONFIDENCE_CAP_KCAL: f64 = 100.0;

/// Recommended adjustments are rounded to this step (kcal/day)
const ADJUSTMENT_STEP_KCAL: f64 = 5.0;

/// Observed rates within this band of the desired rate count as on track
const ON_TRACK_TOLERANCE_LBS_PER_WEEK: f64 = 0.05;

/// Weight entries and macro days both needed for high confidence
const HIGH_CONFIDENCE_MIN_DAYS: usize = 21;

/// Weight entries and macro days both needed for medium confidence
const MEDIUM_CONFIDENCE_MIN_DAYS: usize = 14;

const DAYS_PER_WEEK: f64 = 7.0;

// ============================================================================
// Rounding Helpers
// ============================================================================

fn round0(x: f64) -> f64 {
    x.round()
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to the nearest multiple of [`ADJUSTMENT_STEP_KCAL`]
fn round_to_step(x: f64) -> f64 {
    (x / ADJUSTMENT_STEP_KCAL).round() * ADJUSTMENT_STEP_KCAL
}

// ============================================================================
// Aggregation Helpers
// ============================================================================

/// Plain sums over the logged rows (all zeros when empty)
fn macro_totals(rows: &[MacroRecord]) -> MacroTotals {
    MacroTotals {
        total_calories: rows.iter().map(|r| i64::from(r.calories)).sum(),
        total_protein_g: rows.iter().map(|r| r.protein_g).sum(),
        total_carbs_g: rows.iter().map(|r| r.carbs_g).sum(),
        total_fat_g: rows.iter().map(|r| r.fat_g).sum(),
    }
}

/// Unrounded per-day averages; `None` when no days were logged
fn raw_macro_averages(rows: &[MacroRecord]) -> Option<(f64, f64, f64, f64)> {
    if rows.is_empty() {
        return None;
    }
    let n = rows.len() as f64;
    let totals = macro_totals(rows);
    Some((
        totals.total_calories as f64 / n,
        totals.total_protein_g / n,
        totals.total_carbs_g / n,
        totals.total_fat_g / n,
    ))
}

/// Last minus first weigh-in; `None` with fewer than two entries
fn raw_weight_trend(rows: &[WeightRecord]) -> Option<f64> {
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) if rows.len() >= 2 => Some(last.weight_lbs - first.weight_lbs),
        _ => None,
    }
}

// ============================================================================
// Weekly Insight
// ============================================================================

/// Build the 7-day adherence and macro summary for the week starting at
/// `start`.
///
/// Records must already be restricted to `[start, start + 7 days)` and
/// sorted ascending by day. Averages cover logged days only; totals are
/// plain sums. With a target supplied, per-average deltas are suppressed
/// per metric when the average itself is undefined, while the
/// total-over-logged-days deltas are suppressed only when no days were
/// logged at all (totals default to zero, but a zero-data "met target"
/// signal would mislead).
pub fn build_weekly_insight(
    start: NaiveDate,
    macro_rows: &[MacroRecord],
    weight_rows: &[WeightRecord],
    target: Option<&MacroTarget>,
) -> WeeklyInsight {
    let end = start + Duration::days(7);

    let days_logged = macro_rows.len();
    let adherence = days_logged as f64 / 7.0;

    let averages = raw_macro_averages(macro_rows);
    let totals = macro_totals(macro_rows);

    let (start_weight, end_weight, weight_change) = match weight_rows {
        [] => (None, None, None),
        [only] => (Some(only.weight_lbs), None, None),
        [first, .., last] => (
            Some(first.weight_lbs),
            Some(last.weight_lbs),
            Some(last.weight_lbs - first.weight_lbs),
        ),
    };

    let vs_targets = target.map(|t| {
        let avg = TargetDeltas {
            calories_delta: averages.map(|(cal, _, _, _)| round0(cal - f64::from(t.calories_target))),
            protein_delta_g: averages.map(|(_, pro, _, _)| round2(pro - t.protein_target_g)),
            carbs_delta_g: averages.map(|(_, _, carbs, _)| round2(carbs - t.carbs_target_g)),
            fat_delta_g: averages.map(|(_, _, _, fat)| round2(fat - t.fat_target_g)),
        };

        let n = days_logged as f64;
        let total_over_logged_days = if days_logged > 0 {
            TargetDeltas {
                calories_delta: Some(round0(
                    totals.total_calories as f64 - f64::from(t.calories_target) * n,
                )),
                protein_delta_g: Some(round2(totals.total_protein_g - t.protein_target_g * n)),
                carbs_delta_g: Some(round2(totals.total_carbs_g - t.carbs_target_g * n)),
                fat_delta_g: Some(round2(totals.total_fat_g - t.fat_target_g * n)),
            }
        } else {
            TargetDeltas {
                calories_delta: None,
                protein_delta_g: None,
                carbs_delta_g: None,
                fat_delta_g: None,
            }
        };

        TargetComparison {
            avg,
            total_over_logged_days,
        }
    });

    WeeklyInsight {
        week_start: start,
        week_end_exclusive: end,
        adherence_percent: round2(adherence * 100.0),
        macros: WeeklyMacroSummary {
            days_logged,
            avg_calories: averages.map(|(cal, _, _, _)| round2(cal)),
            avg_protein_g: averages.map(|(_, pro, _, _)| round2(pro)),
            avg_carbs_g: averages.map(|(_, _, carbs, _)| round2(carbs)),
            avg_fat_g: averages.map(|(_, _, _, fat)| round2(fat)),
            daily_macros: macro_rows.to_vec(),
            totals,
        },
        weight: WeeklyWeightSummary {
            entries: weight_rows.len(),
            start_weight_lbs: start_weight,
            end_weight_lbs: end_weight,
            change_lbs: weight_change.map(round2),
            daily_weights: weight_rows.to_vec(),
        },
        targets: target.copied(),
        vs_targets,
    }
}

// ============================================================================
// Rolling Insight
// ============================================================================

/// Build the coarse summary for an arbitrary N-day window.
///
/// `direction` classifies the two-point trend; `Flat` is the fallback for
/// both a genuine zero trend and an undefined one (fewer than two
/// weigh-ins). `trend_lbs` being `None` signals the latter.
pub fn build_rolling_insight(
    days: u32,
    start: NaiveDate,
    end: NaiveDate,
    macro_rows: &[MacroRecord],
    weight_rows: &[WeightRecord],
) -> RollingInsight {
    let averages = raw_macro_averages(macro_rows);
    let trend = raw_weight_trend(weight_rows);

    let direction = match trend {
        Some(t) if t > 0.0 => TrendDirection::Up,
        Some(t) if t < 0.0 => TrendDirection::Down,
        _ => TrendDirection::Flat,
    };

    RollingInsight {
        window_days: days,
        range: DateRange { start, end },
        macros: RollingMacroSummary {
            days_logged: macro_rows.len(),
            avg_calories: averages.map(|(cal, _, _, _)| round1(cal)),
            avg_protein_g: averages.map(|(_, pro, _, _)| round1(pro)),
        },
        weight: RollingWeightSummary {
            entries: weight_rows.len(),
            trend_lbs: trend.map(round2),
            direction,
        },
    }
}

// ============================================================================
// Calorie Adjustment
// ============================================================================

/// Classify trend reliability from actual entry counts, independent of the
/// requested window length.
fn classify_confidence(weight_entries: usize, macro_days: usize) -> Confidence {
    if weight_entries >= HIGH_CONFIDENCE_MIN_DAYS && macro_days >= HIGH_CONFIDENCE_MIN_DAYS {
        Confidence::High
    } else if weight_entries >= MEDIUM_CONFIDENCE_MIN_DAYS && macro_days >= MEDIUM_CONFIDENCE_MIN_DAYS
    {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Recommend a daily calorie adjustment toward a desired weekly rate of
/// weight change.
///
/// The current rate is a two-point slope over the first and last weigh-in,
/// scaled by the calendar-day span between them (tolerates gaps in
/// logging). The adjustment assumes 3500 kcal per pound, is clamped to a
/// safety cap (tightened under low confidence), and rounded to the nearest
/// 5 kcal/day. Missing data never raises: every incomputable quantity
/// comes back as `None` and a warning string where applicable.
pub fn calorie_adjustment(
    days: u32,
    start: NaiveDate,
    end: NaiveDate,
    macro_rows: &[MacroRecord],
    weight_rows: &[WeightRecord],
    desired_lbs_per_week: f64,
) -> CalorieAdjustment {
    let macro_days = macro_rows.len();
    let averages = raw_macro_averages(macro_rows);
    let avg_calories = averages.map(|(cal, _, _, _)| cal);

    let mut start_weight = None;
    let mut end_weight = None;
    let mut trend_lbs = None;
    let mut span_days = None;
    let mut current_rate = None;

    match weight_rows {
        [] => {}
        [only] => start_weight = Some(only.weight_lbs),
        [first, .., last] => {
            start_weight = Some(first.weight_lbs);
            end_weight = Some(last.weight_lbs);
            let trend = last.weight_lbs - first.weight_lbs;
            trend_lbs = Some(trend);

            // Calendar span, not entry count: tolerates gaps in logging.
            // A zero span cannot occur under the one-per-day invariant but
            // would divide by zero, so it leaves the rate undefined.
            let span = (last.day - first.day).num_days();
            span_days = Some(span);
            if span > 0 {
                current_rate = Some(trend / span as f64 * DAYS_PER_WEEK);
            }
        }
    }

    let confidence = classify_confidence(weight_rows.len(), macro_days);

    let mut notes = Vec::new();
    let mut warnings = Vec::new();

    if weight_rows.len() < 2 {
        warnings.push("Not enough weight entries to estimate a trend (need at least 2).".to_string());
    }
    if macro_days == 0 {
        warnings.push("No macro entries found in the lookback window.".to_string());
    }

    let mut delta_rate = None;
    let mut uncapped_adjustment = None;
    let mut capped_adjustment = None;
    let mut recommended_calories = None;

    if let Some(rate) = current_rate {
        let delta = desired_lbs_per_week - rate;
        delta_rate = Some(delta);

        let uncapped = delta * KCAL_PER_LB / DAYS_PER_WEEK;
        uncapped_adjustment = Some(uncapped);

        let cap = if confidence == Confidence::Low {
            ADJUSTMENT_CAP_KCAL.min(LOW_CONFIDENCE_CAP_KCAL)
        } else {
            ADJUSTMENT_CAP_KCAL
        };
        let capped = round_to_step(uncapped.clamp(-cap, cap));
        capped_adjustment = Some(capped);

        recommended_calories = avg_calories.map(|avg| avg + capped);

        notes.push(
            "Weight trend computed using first/last weigh-in over the window (simple slope)."
                .to_string(),
        );
        notes.push("Calorie adjustment uses 3500 kcal ≈ 1 lb and is capped for safety.".to_string());
        if confidence == Confidence::Low {
            notes.push("Low confidence: adjustment cap reduced to 100 kcal/day.".to_string());
        }
    }

    let status = match current_rate {
        None => AdjustmentStatus::InsufficientData,
        Some(rate) => {
            if (desired_lbs_per_week - rate).abs() <= ON_TRACK_TOLERANCE_LBS_PER_WEEK {
                AdjustmentStatus::OnTrack
            } else if desired_lbs_per_week > rate {
                AdjustmentStatus::IncreaseCalories
            } else {
                AdjustmentStatus::DecreaseCalories
            }
        }
    };

    CalorieAdjustment {
        window_days_requested: days,
        range: DateRange { start, end },
        status,
        confidence,
        macros: MacroAverages {
            days_logged: macro_days,
            avg_calories: averages.map(|(cal, _, _, _)| round2(cal)),
            avg_protein_g: averages.map(|(_, pro, _, _)| round2(pro)),
            avg_carbs_g: averages.map(|(_, _, carbs, _)| round2(carbs)),
            avg_fat_g: averages.map(|(_, _, _, fat)| round2(fat)),
        },
        weight: TrendEstimate {
            entries: weight_rows.len(),
            start_weight_lbs: start_weight,
            end_weight_lbs: end_weight,
            trend_lbs: trend_lbs.map(round2),
            span_days,
            current_rate_lbs_per_week: current_rate.map(round2),
            desired_rate_lbs_per_week: round2(desired_lbs_per_week),
            delta_rate_lbs_per_week: delta_rate.map(round2),
        },
        recommendation: Recommendation {
            calorie_adjustment_per_day: capped_adjustment.map(round0),
            uncapped_calorie_adjustment_per_day: uncapped_adjustment.map(round0),
            recommended_daily_calories: recommended_calories.map(round0),
        },
        notes,
        warnings,
    }
}
