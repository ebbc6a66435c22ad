//! Input validation functions
//!
//! Range checks applied before records enter a journal. The insight
//! builders themselves do not validate; they trust the caller.

use crate::models::{MacroRecord, MacroTarget};

/// Validate a weigh-in value (in lbs)
pub fn validate_weight_lbs(weight_lbs: f64) -> Result<(), String> {
    if weight_lbs.is_nan() || weight_lbs.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_lbs <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    if weight_lbs >= 1000.0 {
        return Err("Weight must be under 1000 lbs".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: i32) -> Result<(), String> {
    if calories <= 0 {
        return Err("Calories must be positive".to_string());
    }
    if calories >= 20000 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a macro gram value against an upper bound
fn validate_grams(grams: f64, label: &str, max: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err(format!("{label} must be a valid number"));
    }
    if grams < 0.0 {
        return Err(format!("{label} cannot be negative"));
    }
    if grams >= max {
        return Err(format!("{label} must be under {max} g"));
    }
    Ok(())
}

/// Validate a full day of logged macros
pub fn validate_macro_record(record: &MacroRecord) -> Result<(), String> {
    validate_calories(record.calories)?;
    validate_grams(record.protein_g, "Protein", 1000.0)?;
    validate_grams(record.carbs_g, "Carbs", 2000.0)?;
    validate_grams(record.fat_g, "Fat", 1000.0)?;
    Ok(())
}

/// Validate a macro target
pub fn validate_target(target: &MacroTarget) -> Result<(), String> {
    validate_calories(target.calories_target)?;
    validate_grams(target.protein_target_g, "Protein target", 1000.0)?;
    validate_grams(target.carbs_target_g, "Carbs target", 2000.0)?;
    validate_grams(target.fat_target_g, "Fat target", 1000.0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(calories: i32, protein_g: f64, carbs_g: f64, fat_g: f64) -> MacroRecord {
        MacroRecord {
            day: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    #[test]
    fn test_weight_bounds() {
        assert!(validate_weight_lbs(180.0).is_ok());
        assert!(validate_weight_lbs(0.1).is_ok());
        assert!(validate_weight_lbs(0.0).is_err());
        assert!(validate_weight_lbs(-5.0).is_err());
        assert!(validate_weight_lbs(1000.0).is_err());
        assert!(validate_weight_lbs(f64::NAN).is_err());
    }

    #[test]
    fn test_macro_record_bounds() {
        assert!(validate_macro_record(&record(2000, 100.0, 200.0, 70.0)).is_ok());
        // Zero grams are legitimate (a fasting day still has calories > 0)
        assert!(validate_macro_record(&record(500, 0.0, 0.0, 0.0)).is_ok());
        assert!(validate_macro_record(&record(0, 100.0, 200.0, 70.0)).is_err());
        assert!(validate_macro_record(&record(20000, 100.0, 200.0, 70.0)).is_err());
        assert!(validate_macro_record(&record(2000, -1.0, 200.0, 70.0)).is_err());
        assert!(validate_macro_record(&record(2000, 100.0, 2000.0, 70.0)).is_err());
        assert!(validate_macro_record(&record(2000, 100.0, 200.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_target_bounds() {
        let target = MacroTarget {
            calories_target: 2200,
            protein_target_g: 150.0,
            carbs_target_g: 200.0,
            fat_target_g: 70.0,
        };
        assert!(validate_target(&target).is_ok());

        let bad = MacroTarget {
            calories_target: 0,
            ..target
        };
        assert!(validate_target(&bad).is_err());
    }
}
