//! Health metrics calculations module
//!
//! Provides BMI computation and health verdict classification for
//! patient records.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Derived, Never Stored**: BMI and verdict are recomputed on every
//!    read so they can never drift from the stored height/weight
//! 3. **Round Before Classify**: classification uses the rounded BMI value
//!    so API responses and verdicts always agree

use serde::{Deserialize, Serialize};

/// Health verdict derived from BMI
///
/// Boundary values (18.5, 25.0, 30.0) belong to the upper bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthVerdict {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl HealthVerdict {
    /// Get the BMI range for this verdict
    pub fn range(&self) -> (f64, f64) {
        match self {
            HealthVerdict::Underweight => (0.0, 18.5),
            HealthVerdict::Normal => (18.5, 25.0),
            HealthVerdict::Overweight => (25.0, 30.0),
            HealthVerdict::Obesity => (30.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            HealthVerdict::Underweight => "Below healthy weight range",
            HealthVerdict::Normal => "Within healthy weight range",
            HealthVerdict::Overweight => "Above healthy weight range",
            HealthVerdict::Obesity => "Well above healthy weight range",
        }
    }
}

/// Calculate raw BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Calculate BMI rounded to 2 decimal places
///
/// This is the value returned to callers and the value verdicts are
/// classified against.
pub fn rounded_bmi(weight_kg: f64, height_m: f64) -> f64 {
    round2(calculate_bmi(weight_kg, height_m))
}

/// Round a value to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Classify a (rounded) BMI value into a health verdict
pub fn classify_bmi(bmi: f64) -> HealthVerdict {
    if bmi < 18.5 {
        HealthVerdict::Underweight
    } else if bmi < 25.0 {
        HealthVerdict::Normal
    } else if bmi < 30.0 {
        HealthVerdict::Overweight
    } else {
        HealthVerdict::Obesity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, HealthVerdict::Underweight)]
    #[case(18.49, HealthVerdict::Underweight)]
    #[case(18.5, HealthVerdict::Normal)]
    #[case(24.99, HealthVerdict::Normal)]
    #[case(25.0, HealthVerdict::Overweight)]
    #[case(29.99, HealthVerdict::Overweight)]
    #[case(30.0, HealthVerdict::Obesity)]
    #[case(45.0, HealthVerdict::Obesity)]
    fn test_classify_bmi_boundaries(#[case] bmi: f64, #[case] expected: HealthVerdict) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_known_patient_values() {
        // 1.70 m, 60 kg -> 20.76 -> Normal
        let bmi = rounded_bmi(60.0, 1.70);
        assert_eq!(bmi, 20.76);
        assert_eq!(classify_bmi(bmi), HealthVerdict::Normal);
    }

    #[test]
    fn test_verdict_serializes_as_label() {
        let json = serde_json::to_string(&HealthVerdict::Underweight).unwrap();
        assert_eq!(json, "\"Underweight\"");
        let json = serde_json::to_string(&HealthVerdict::Obesity).unwrap();
        assert_eq!(json, "\"Obesity\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_rounded_bmi_has_two_decimals(
            weight in 1.0f64..500.0,
            height in 0.5f64..3.0
        ) {
            let bmi = rounded_bmi(weight, height);
            let scaled = bmi * 100.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-9,
                "bmi {} is not rounded to 2 decimals", bmi);
        }

        #[test]
        fn prop_rounding_error_bounded(
            weight in 1.0f64..500.0,
            height in 0.5f64..3.0
        ) {
            let raw = calculate_bmi(weight, height);
            let rounded = rounded_bmi(weight, height);
            prop_assert!((raw - rounded).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn prop_verdict_matches_range(
            weight in 1.0f64..500.0,
            height in 0.5f64..3.0
        ) {
            let bmi = rounded_bmi(weight, height);
            let verdict = classify_bmi(bmi);
            let (lo, hi) = verdict.range();
            prop_assert!(bmi >= lo && bmi < hi,
                "bmi {} outside range of {:?}", bmi, verdict);
        }
    }
}
