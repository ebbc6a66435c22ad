//! In-memory nutrition journal
//!
//! Single-user store for daily macro and weight records plus the active
//! target. Records are keyed by day in a `BTreeMap`, which is what
//! guarantees the sorted, one-record-per-day sequences the insight
//! builders assume. Upserts replace an existing day's entry and report
//! whether the row was created or updated.

use std::collections::BTreeMap;
use std::ops::Bound;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use macrotrack_shared::insights::{build_rolling_insight, build_weekly_insight, calorie_adjustment};
use macrotrack_shared::models::{MacroRecord, MacroTarget, WeightRecord};
use macrotrack_shared::types::{CalorieAdjustment, RollingInsight, WeeklyInsight};
use macrotrack_shared::validation::{validate_macro_record, validate_target, validate_weight_lbs};

use crate::error::JournalError;
use crate::window;

/// Whether an upsert inserted a new row or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
    Created,
    Updated,
}

/// Outcome of a bulk upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpsertSummary {
    pub created: usize,
    pub updated: usize,
}

/// Single-user nutrition and weight journal
#[derive(Debug, Clone, Default)]
pub struct Journal {
    weights: BTreeMap<NaiveDate, f64>,
    macros: BTreeMap<NaiveDate, MacroRecord>,
    target: Option<MacroTarget>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Logging
    // ------------------------------------------------------------------

    /// Insert or replace the weigh-in for a day
    pub fn log_weight(&mut self, record: WeightRecord) -> Result<UpsertAction, JournalError> {
        validate_weight_lbs(record.weight_lbs).map_err(JournalError::Validation)?;
        let action = match self.weights.insert(record.day, record.weight_lbs) {
            Some(_) => UpsertAction::Updated,
            None => UpsertAction::Created,
        };
        debug!(day = %record.day, weight_lbs = record.weight_lbs, ?action, "weight logged");
        Ok(action)
    }

    /// Upsert a batch of weigh-ins. The whole batch is validated before
    /// anything is applied; one bad entry rejects the lot.
    pub fn log_weights_bulk(
        &mut self,
        records: &[WeightRecord],
    ) -> Result<BulkUpsertSummary, JournalError> {
        for record in records {
            validate_weight_lbs(record.weight_lbs).map_err(JournalError::Validation)?;
        }

        let mut summary = BulkUpsertSummary { created: 0, updated: 0 };
        for record in records {
            match self.weights.insert(record.day, record.weight_lbs) {
                Some(_) => summary.updated += 1,
                None => summary.created += 1,
            }
        }
        debug!(created = summary.created, updated = summary.updated, "bulk weights logged");
        Ok(summary)
    }

    /// Insert or replace the macro record for a day
    pub fn log_macros(&mut self, record: MacroRecord) -> Result<UpsertAction, JournalError> {
        validate_macro_record(&record).map_err(JournalError::Validation)?;
        let action = match self.macros.insert(record.day, record) {
            Some(_) => UpsertAction::Updated,
            None => UpsertAction::Created,
        };
        debug!(day = %record.day, calories = record.calories, ?action, "macros logged");
        Ok(action)
    }

    /// Upsert a batch of macro records; validated wholesale like
    /// [`Journal::log_weights_bulk`]
    pub fn log_macros_bulk(
        &mut self,
        records: &[MacroRecord],
    ) -> Result<BulkUpsertSummary, JournalError> {
        for record in records {
            validate_macro_record(record).map_err(JournalError::Validation)?;
        }

        let mut summary = BulkUpsertSummary { created: 0, updated: 0 };
        for record in records {
            match self.macros.insert(record.day, *record) {
                Some(_) => summary.updated += 1,
                None => summary.created += 1,
            }
        }
        debug!(created = summary.created, updated = summary.updated, "bulk macros logged");
        Ok(summary)
    }

    /// Set or replace the active target
    pub fn set_target(&mut self, target: MacroTarget) -> Result<UpsertAction, JournalError> {
        validate_target(&target).map_err(JournalError::Validation)?;
        let action = match self.target.replace(target) {
            Some(_) => UpsertAction::Updated,
            None => UpsertAction::Created,
        };
        debug!(calories_target = target.calories_target, ?action, "target set");
        Ok(action)
    }

    pub fn target(&self) -> Option<&MacroTarget> {
        self.target.as_ref()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Weigh-ins in `[start, end)`, ascending by day
    pub fn weights_in(&self, start: NaiveDate, end: NaiveDate) -> Vec<WeightRecord> {
        self.weights_between(Bound::Included(start), Bound::Excluded(end))
    }

    /// Macro records in `[start, end)`, ascending by day
    pub fn macros_in(&self, start: NaiveDate, end: NaiveDate) -> Vec<MacroRecord> {
        self.macros_between(Bound::Included(start), Bound::Excluded(end))
    }

    fn weights_between(&self, lower: Bound<NaiveDate>, upper: Bound<NaiveDate>) -> Vec<WeightRecord> {
        self.weights
            .range((lower, upper))
            .map(|(&day, &weight_lbs)| WeightRecord { day, weight_lbs })
            .collect()
    }

    fn macros_between(&self, lower: Bound<NaiveDate>, upper: Bound<NaiveDate>) -> Vec<MacroRecord> {
        self.macros.range((lower, upper)).map(|(_, record)| *record).collect()
    }

    // ------------------------------------------------------------------
    // Insights
    // ------------------------------------------------------------------

    /// Weekly adherence summary for the week starting at `start`
    pub fn weekly_insight(&self, start: NaiveDate) -> WeeklyInsight {
        let (start, end) = window::weekly_window(start);
        let macro_rows = self.macros_between(Bound::Included(start), Bound::Excluded(end));
        let weight_rows = self.weights_between(Bound::Included(start), Bound::Excluded(end));
        debug!(%start, macro_rows = macro_rows.len(), weight_rows = weight_rows.len(), "building weekly insight");
        build_weekly_insight(start, &macro_rows, &weight_rows, self.target.as_ref())
    }

    /// Rolling summary over the `days` ending at `today`, inclusive
    pub fn rolling_insight(&self, days: u32, today: NaiveDate) -> Result<RollingInsight, JournalError> {
        let (start, end) = window::rolling_window(days, today)?;
        let macro_rows = self.macros_between(Bound::Included(start), Bound::Included(end));
        let weight_rows = self.weights_between(Bound::Included(start), Bound::Included(end));
        debug!(days, macro_rows = macro_rows.len(), weight_rows = weight_rows.len(), "building rolling insight");
        Ok(build_rolling_insight(days, start, end, &macro_rows, &weight_rows))
    }

    /// Calorie-adjustment recommendation over the lookback ending at
    /// `today`, against a desired weekly rate of weight change
    pub fn adjustment(
        &self,
        days: u32,
        today: NaiveDate,
        desired_lbs_per_week: f64,
    ) -> Result<CalorieAdjustment, JournalError> {
        let (start, end) = window::lookback_window(days, today)?;
        let macro_rows = self.macros_between(Bound::Excluded(start), Bound::Included(end));
        let weight_rows = self.weights_between(Bound::Excluded(start), Bound::Included(end));
        debug!(days, desired_lbs_per_week, macro_rows = macro_rows.len(), weight_rows = weight_rows.len(), "building adjustment");
        Ok(calorie_adjustment(
            days,
            start,
            end,
            &macro_rows,
            &weight_rows,
            desired_lbs_per_week,
        ))
    }
}
